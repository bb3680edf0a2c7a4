//! 測試共用的素材產生器（單元測試與 tests/ 共用）

use std::fs;
use std::io;
use std::path::Path;

pub const TAG_MODEL: u16 = 0x0110;
pub const TAG_DATE_TIME: u16 = 0x0132;

/// 產生只含 IFD0 ASCII 欄位的最小 little-endian TIFF
pub fn tiff_with_ascii_tags(tags: &[(u16, &str)]) -> Vec<u8> {
    let mut sorted: Vec<(u16, &str)> = tags.to_vec();
    sorted.sort_by_key(|(tag, _)| *tag);

    let ifd_len = 2 + sorted.len() * 12 + 4;
    let mut data_offset = 8 + ifd_len;
    let mut out = Vec::new();
    let mut data = Vec::new();

    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());
    out.extend_from_slice(&(sorted.len() as u16).to_le_bytes());

    for (tag, value) in &sorted {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        if bytes.len() <= 4 {
            bytes.resize(4, 0);
            out.extend_from_slice(&bytes);
        } else {
            out.extend_from_slice(&(data_offset as u32).to_le_bytes());
            data_offset += bytes.len();
            data.extend_from_slice(&bytes);
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data);
    out
}

/// 寫入一張帶有相機型號與拍攝時間的測試照片
pub fn write_photo(path: &Path, model: &str, date_time: &str) -> io::Result<()> {
    let tiff = tiff_with_ascii_tags(&[(TAG_MODEL, model), (TAG_DATE_TIME, date_time)]);
    fs::write(path, tiff)
}
