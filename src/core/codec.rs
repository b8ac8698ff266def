use csv::{ReaderBuilder, Trim};

use crate::domain::model::{Boat, Placement};
use crate::utils::error::{MarinaError, Result};

pub const MAX_NAME_CHARS: usize = 127;
pub const MAX_LICENSE_CHARS: usize = 19;

/// 解析一行資料：name,length,kind,extra,amountOwed
///
/// 欄位前後空白會先被修剪；不足 5 欄整行拒絕，多出的欄位忽略。
pub fn parse_line(line: &str) -> Result<Boat> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false) // 格式不支援引號跳脫，引號視為一般字元
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let record = match reader.records().next() {
        Some(record) => record?,
        None => {
            return Err(MarinaError::ParseError {
                message: "empty line".to_string(),
            })
        }
    };

    if record.len() < 5 {
        return Err(MarinaError::ParseError {
            message: format!("expected 5 fields, got {}", record.len()),
        });
    }

    let name = clamp_chars(&record[0], MAX_NAME_CHARS);
    if name.is_empty() {
        return Err(MarinaError::ParseError {
            message: "boat name is empty".to_string(),
        });
    }

    let length = lenient_f64(&record[1]);
    if !length.is_finite() || length < 0.0 {
        return Err(MarinaError::ParseError {
            message: format!("invalid length '{}' for boat '{}'", &record[1], name),
        });
    }

    let placement = parse_placement(&record[2], &record[3])?;
    let amount_owed = lenient_f64(&record[4]);

    Ok(Boat {
        name,
        length,
        placement,
        amount_owed,
    })
}

/// 反向操作：長度取 0 位小數、欠款取 2 位小數，extra 依存放方式輸出
pub fn format_line(boat: &Boat) -> String {
    let extra = match &boat.placement {
        Placement::Slip { number } => number.to_string(),
        Placement::Land { bay } => bay.to_string(),
        Placement::Trailer { license } => license.clone(),
        Placement::Storage { number } => number.to_string(),
    };

    format!(
        "{},{:.0},{},{},{:.2}",
        boat.name,
        boat.length,
        boat.placement.kind_name(),
        extra,
        boat.amount_owed
    )
}

fn parse_placement(kind: &str, extra: &str) -> Result<Placement> {
    match kind.to_ascii_lowercase().as_str() {
        "slip" => Ok(Placement::Slip {
            number: lenient_i32(extra),
        }),
        "land" => match extra.chars().next() {
            Some(bay) => Ok(Placement::Land { bay }),
            None => Err(MarinaError::ParseError {
                message: "land placement needs a bay letter".to_string(),
            }),
        },
        // 舊資料檔寫的是 "trailor"，讀取時接受為別名，寫回時用標準拼法
        "trailer" | "trailor" => Ok(Placement::Trailer {
            license: clamp_chars(extra, MAX_LICENSE_CHARS),
        }),
        "storage" => Ok(Placement::Storage {
            number: lenient_i32(extra),
        }),
        other => Err(MarinaError::ParseError {
            message: format!("unknown placement kind '{}'", other),
        }),
    }
}

/// 寬鬆數值轉換：取最長可解析的數字前綴，完全無法解析就回傳 0。
/// 這是資料檔既有的轉換契約（"abc" -> 0.0、"12.5ft" -> 12.5），不可改成嚴格解析。
pub fn lenient_f64(text: &str) -> f64 {
    let mut value = 0.0;
    for end in 1..=text.len() {
        if !text.is_char_boundary(end) {
            continue;
        }
        if let Ok(parsed) = text[..end].parse::<f64>() {
            value = parsed;
        }
    }
    value
}

/// 整數版的寬鬆轉換："21a" -> 21、"12.5" -> 12、"abc" -> 0
pub fn lenient_i32(text: &str) -> i32 {
    let mut value = 0;
    for end in 1..=text.len() {
        if !text.is_char_boundary(end) {
            continue;
        }
        if let Ok(parsed) = text[..end].parse::<i32>() {
            value = parsed;
        }
    }
    value
}

fn clamp_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
