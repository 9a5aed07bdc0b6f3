// src/decode/mod.rs

pub mod records;
pub mod workbook;
