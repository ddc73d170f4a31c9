use navindex::{Anchor, IndexEntry};

/// The navigation script the documentation generator wrote for `i2c.h`.
pub const I2C_SCRIPT: &str = include_str!("../fixtures/i2c_8h.js");

pub const I2C_INIT_ANCHOR: &str = "i2c_8h.html#a686a0e3d2995005784771e68358e4185";
pub const I2C_MODE_ANCHOR: &str = "i2c_8h.html#ae4566330c54fb5c0b7195f57823a38f9";
pub const I2C_FAST_MODE_ANCHOR: &str =
    "i2c_8h.html#ae4566330c54fb5c0b7195f57823a38f9a0ad804e3e3125d43402aa933db973a25";

/// Top-level names of the fixture, in declaration order.
pub const I2C_TOP_LEVEL: [&str; 18] = [
    "I2C_CCRH_FS",
    "I2C_CR1_PE",
    "I2C_CR2_ACK",
    "I2C_CR2_START",
    "I2C_CR2_STOP",
    "I2C_OARH_ADDMODE",
    "I2C_SR1_ADDR",
    "I2C_SR1_RXNE",
    "I2C_SR1_SB",
    "I2C_SR1_TXE",
    "I2C_Mode_t",
    "I2C_Init",
    "I2C_ReadData_ACK",
    "I2C_ReadData_NACK",
    "I2C_Start",
    "I2C_Stop",
    "I2C_WriteAddress",
    "I2C_WriteData",
];

/// A small hand-built table covering every entry kind.
pub fn mixed_entries() -> Vec<IndexEntry> {
    vec![
        IndexEntry::leaf("I2C_Init", I2C_INIT_ANCHOR),
        IndexEntry::group(
            "I2C_Mode_t",
            Some(Anchor::from(I2C_MODE_ANCHOR)),
            vec![
                IndexEntry::leaf("I2C_STANDARD_MODE", "i2c_8h.html#std"),
                IndexEntry::leaf("I2C_FAST_MODE", I2C_FAST_MODE_ANCHOR),
            ],
        ),
        IndexEntry::group(
            "Registers",
            None,
            vec![IndexEntry::group(
                "CR2",
                None,
                vec![IndexEntry::leaf("I2C_CR2_ACK", "group___cr2.html#ack \"quoted\"")],
            )],
        ),
        IndexEntry::deferred("Files", Some(Anchor::from("files.html")), "files_dup"),
    ]
}
