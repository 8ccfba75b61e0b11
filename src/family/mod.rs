use crate::error::FlashError;

/// OpenOCD target families, in match priority order. The first entry whose
/// prefix matches the MCU name wins.
pub static OPENOCD_FAMILIES: &[Family] = &[
    Family::new("stm8s003"),
    Family::new("stm8s103"),
    Family::new("stm8s105"),
    Family::new("stm32c0x"),
    Family::new("stm32f0x"),
    Family::new("stm32f1x"),
    Family::new("stm32f2x"),
    Family::new("stm32f3x"),
    Family::new("stm32f4x"),
    Family::new("stm32f7x"),
    Family::new("stm32g0x"),
    Family::new("stm32g4x"),
    Family::new("stm32h7x"),
    Family::new("stm32l0"),
    Family::new("stm32l1"),
    Family::new("stm32l4x"),
    Family::new("stm32l5x"),
    Family::new("stm32u5x"),
    Family::new("stm32wbx"),
    Family::new("stm32wlx"),
    Family::new("stm32h5x"),
];

/// Which external flashing tool handles an MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Stm32,
    Esp32,
}

impl Platform {
    /// Routes a lowercased MCU name to its platform.
    pub fn route(mcu: &str) -> Result<Self, FlashError> {
        if mcu.starts_with("stm32") {
            Ok(Platform::Stm32)
        } else if mcu.starts_with("esp32") {
            Ok(Platform::Esp32)
        } else {
            Err(FlashError::UnsupportedMcu(mcu.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    name: &'static str,
}

impl Family {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    // A trailing `x` is a wildcard over the rest of the part number.
    pub fn prefix(&self) -> &'static str {
        self.name.strip_suffix('x').unwrap_or(self.name)
    }

    /// File name of the matching config under openocd's `scripts/target`.
    pub fn config_file(&self) -> String {
        format!("{}.cfg", self.name)
    }

    pub fn matches(&self, mcu: &str) -> bool {
        mcu.starts_with(self.prefix())
    }
}

/// Maps an MCU name to its OpenOCD family. Matching is case-insensitive.
pub fn classify(mcu: &str) -> Option<Family> {
    classify_in(OPENOCD_FAMILIES, mcu)
}

/// First family in `table` whose prefix matches `mcu`.
pub fn classify_in(table: &[Family], mcu: &str) -> Option<Family> {
    let mcu = mcu.to_ascii_lowercase();
    table.iter().copied().find(|f| f.matches(&mcu))
}
