mod loader;

pub use loader::{DumpError, PayloadDump, load_dumps_from};
