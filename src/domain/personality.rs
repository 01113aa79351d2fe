use crate::domain::wire_enum::wire_enum;

wire_enum! {
    /// Role a device plays in the overlay.
    Personality {
        Edge => "vedge",
        Vbond => "vbond",
        Vsmart => "vsmart",
        Vmanage => "vmanage",
    }
}
