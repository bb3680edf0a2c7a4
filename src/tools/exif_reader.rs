//! 以 kamadak-exif 讀取圖片容器內的 EXIF 欄位
//!
//! 欄位名稱採 `"<IFD> <Tag>"` 格式，例如 `Image Model`、`EXIF DateTimeOriginal`。

use super::metadata::TagMap;
use exif::{Context, Field, In, Reader, Value};
use log::debug;
use std::io::{BufRead, Seek};

/// 讀取所有 EXIF 欄位；無法解析時回傳空表
pub fn read_exif_tags<R: BufRead + Seek>(reader: &mut R) -> TagMap {
    let exif = match Reader::new().read_from_container(reader) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("EXIF 解析失敗: {e}");
            return TagMap::new();
        }
    };

    exif.fields()
        .map(|field| (tag_key(field), field_value(field)))
        .collect()
}

fn tag_key(field: &Field) -> String {
    format!("{} {}", ifd_prefix(field), field.tag)
}

#[allow(unreachable_patterns)]
fn ifd_prefix(field: &Field) -> &'static str {
    if field.ifd_num == In::THUMBNAIL {
        return "Thumbnail";
    }

    match field.tag.context() {
        Context::Tiff => "Image",
        Context::Exif => "EXIF",
        Context::Gps => "GPS",
        Context::Interop => "Interoperability",
        _ => "Unknown",
    }
}

/// ASCII 欄位取原始字串（不含引號），其他型別使用顯示值
fn field_value(field: &Field) -> String {
    match &field.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_end_matches('\0')
                    .trim()
                    .to_string()
            })
            .unwrap_or_default(),
        _ => field.display_value().to_string(),
    }
}
