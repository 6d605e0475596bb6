//! Built-in brand presets covering every supported protocol.

use crate::payload::{Payload, SircBits};
use crate::preset::{BrandPreset, DevicePreset, IrCommand};
use crate::protocol::panasonic::PANASONIC_VENDOR;
use crate::protocol::Protocol;

const SAMSUNG_ADDRESS: u32 = 0xE0E0;
const SONY_TV_DEVICE: u32 = 1;
const PHILIPS_TV_ADDRESS: u32 = 0x10;
const MEDIA_CENTER_ADDRESS: u32 = 0x800;
const PANASONIC_TV_ADDRESS: u32 = 0x0100;
const SHARP_AUDIO_ADDRESS: u32 = 0x02;
const FAN_ADDRESS: u32 = 0x10EF;
const AC_ADDRESS: u32 = 0x1C;

/// Returns the catalog bundled with the application.
pub fn default_brands() -> Vec<BrandPreset> {
    vec![
        BrandPreset::new("Samsung", Protocol::Nec, vec![samsung_tv()]),
        BrandPreset::new("Sony", Protocol::Sirc, vec![sony_bravia()]),
        BrandPreset::new("Philips", Protocol::Rc5, vec![philips_tv()]),
        BrandPreset::new("Media Center", Protocol::Rc6, vec![media_center()]),
        BrandPreset::new("Panasonic", Protocol::Panasonic, vec![panasonic_tv()]),
        BrandPreset::new("Sharp", Protocol::Sharp, vec![sharp_soundbar()]),
        BrandPreset::new("Generic Fan", Protocol::Nec, vec![ceiling_fan()]),
        BrandPreset::new("Generic AC", Protocol::Rc5, vec![split_ac()]),
    ]
}

fn samsung_tv() -> DevicePreset {
    let nec = |command| Payload::nec(SAMSUNG_ADDRESS, command);
    DevicePreset::new(
        "Samsung Smart TV",
        vec![
            IrCommand::new("Power", nec(0x0CF3)),
            IrCommand::new("Volume +", nec(0x0E0E)),
            IrCommand::new("Volume -", nec(0x0E0F)),
            IrCommand::new("Channel +", nec(0x0C12)),
            IrCommand::new("Channel -", nec(0x0C13)),
            IrCommand::new("Mute", nec(0x0E11)),
            IrCommand::new("Menu", nec(0x0C3A)),
            IrCommand::new("Home", nec(0x0C6D)),
            IrCommand::new("Back", nec(0x0C4C)),
            IrCommand::new("Enter", nec(0x0C40)),
        ],
    )
}

fn sony_bravia() -> DevicePreset {
    let sirc = |command| Payload::sirc(command, SONY_TV_DEVICE, SircBits::Twelve);
    DevicePreset::new(
        "Sony Bravia",
        vec![
            IrCommand::new("Power", sirc(0x15)),
            IrCommand::new("Input", sirc(0x2C)),
            IrCommand::new("Volume +", sirc(0x12)),
            IrCommand::new("Volume -", sirc(0x13)),
        ],
    )
}

fn philips_tv() -> DevicePreset {
    let rc5 = |command| Payload::rc5(PHILIPS_TV_ADDRESS, command);
    DevicePreset::new(
        "Philips Ambilight",
        vec![
            IrCommand::new("Power", rc5(0x0C)),
            IrCommand::new("Source", rc5(0x38)),
            IrCommand::new("Volume +", rc5(0x10)),
            IrCommand::new("Volume -", rc5(0x11)),
        ],
    )
}

fn media_center() -> DevicePreset {
    // 0x800 does not fit the 8-bit RC6 address; it is masked to 0x00 on encode.
    let rc6 = |command| Payload::rc6(0, MEDIA_CENTER_ADDRESS, command);
    DevicePreset::new(
        "Media Center",
        vec![
            IrCommand::new("Power", rc6(0x0C)),
            IrCommand::new("Play/Pause", rc6(0x5C)),
            IrCommand::new("Stop", rc6(0x80)),
        ],
    )
}

fn panasonic_tv() -> DevicePreset {
    let kaseikyo = |command| Payload::panasonic(PANASONIC_VENDOR, PANASONIC_TV_ADDRESS, command);
    DevicePreset::new(
        "Panasonic Viera",
        vec![
            IrCommand::new("Power", kaseikyo(0x1000)),
            IrCommand::new("Menu", kaseikyo(0x1A1A)),
            IrCommand::new("OK", kaseikyo(0x1AE0)),
        ],
    )
}

fn sharp_soundbar() -> DevicePreset {
    let sharp = |command| Payload::sharp(SHARP_AUDIO_ADDRESS, command);
    DevicePreset::new(
        "Sharp Soundbar",
        vec![
            IrCommand::new("Power", sharp(0x02)),
            IrCommand::new("Volume +", sharp(0x10)),
            IrCommand::new("Volume -", sharp(0x11)),
        ],
    )
}

fn ceiling_fan() -> DevicePreset {
    let nec = |command| Payload::nec(FAN_ADDRESS, command);
    DevicePreset::new(
        "Ceiling Fan",
        vec![
            IrCommand::new("Power", nec(0x00FF)),
            IrCommand::new("Speed +", nec(0x807F)),
            IrCommand::new("Speed -", nec(0x40BF)),
            IrCommand::new("Rotate", nec(0x20DF)),
        ],
    )
}

fn split_ac() -> DevicePreset {
    let rc5 = |command| Payload::rc5(AC_ADDRESS, command);
    DevicePreset::new(
        "Split AC",
        vec![
            IrCommand::new("Power", rc5(0x0C)),
            IrCommand::new("Cool", rc5(0x2D)),
            IrCommand::new("Heat", rc5(0x2E)),
            IrCommand::new("Fan", rc5(0x14)),
        ],
    )
}
