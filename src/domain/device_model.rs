use crate::domain::wire_enum::wire_enum;

wire_enum! {
    /// Device model as reported in template and inventory `deviceType` fields.
    DeviceModel {
        Vedge => "vedge",
        VedgeCloud => "vedge-cloud",
        Vsmart => "vsmart",
        Vmanage => "vmanage",
        C8000v => "vedge-C8000V",
        Isr4331 => "vedge-ISR-4331",
        Isr4351 => "vedge-ISR-4351",
        Asr1001X => "vedge-ASR-1001-X",
        Csr1000v => "vedge-CSR-1000v",
        Isr1100G4 => "vedge-ISR1100-4G",
        Isr1100G6 => "vedge-ISR1100-6G",
        Isrv => "vedge-ISRv",
        Vedge100 => "vedge-100",
        Vedge1000 => "vedge-1000",
        Vedge2000 => "vedge-2000",
        Vedge5000 => "vedge-5000",
    }
}
