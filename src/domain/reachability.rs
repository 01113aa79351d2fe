use crate::domain::wire_enum::wire_enum;

wire_enum! {
    Reachability {
        Reachable => "reachable",
        Unreachable => "unreachable",
    }
}
