use tracing::warn;

use crate::core::codec;
use crate::core::registry::Registry;
use crate::domain::ports::Storage;
use crate::utils::error::{MarinaError, Result};

/// 載入結果統計：成功筆數與略過筆數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// 從資料檔載入船隻。壞行與重複名稱記 warning 後略過，不中斷整個載入；
/// 清單滿了就停止讀取，剩下的行不再處理。
pub fn load_all<S: Storage>(storage: &S, path: &str, registry: &mut Registry) -> Result<LoadSummary> {
    let data = storage.read_file(path)?;
    let mut summary = LoadSummary::default();

    for (index, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if registry.is_full() {
            warn!(
                "⚠️ Inventory is full ({} boats), ignoring the rest of '{}'",
                registry.capacity(),
                path
            );
            break;
        }

        let boat = match codec::parse_line(line) {
            Ok(boat) => boat,
            Err(error) => {
                warn!("⚠️ Skipping line {} of '{}': {}", index + 1, path, error);
                summary.skipped += 1;
                continue;
            }
        };

        match registry.add(boat) {
            Ok(()) => summary.loaded += 1,
            Err(MarinaError::DuplicateNameError { name }) => {
                warn!("⚠️ Skipping line {} of '{}': duplicate boat '{}'", index + 1, path, name);
                summary.skipped += 1;
            }
            Err(error) => return Err(error),
        }
    }

    Ok(summary)
}

/// 把整份清單寫回資料檔，一船一行，依清單順序（即名稱排序）
pub fn save_all<S: Storage>(storage: &S, path: &str, registry: &Registry) -> Result<()> {
    let mut data = String::new();
    for boat in registry.iter() {
        data.push_str(&codec::format_line(boat));
        data.push('\n');
    }
    storage.write_file(path, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MemoryStorage {
        files: RefCell<HashMap<String, String>>,
    }

    impl MemoryStorage {
        fn new() -> Self {
            Self {
                files: RefCell::new(HashMap::new()),
            }
        }

        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::new();
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), data.to_string());
            storage
        }

        fn contents(&self, path: &str) -> Option<String> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<String> {
            match self.files.borrow().get(path) {
                Some(data) => Ok(data.clone()),
                None => Err(MarinaError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file: {}", path),
                ))),
            }
        }

        fn write_file(&self, path: &str, data: &str) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_load_all_counts_and_sorts() {
        let storage = MemoryStorage::with_file(
            "boats.csv",
            "Sea Lion,21,slip,21,100.50\nJon Boat,14,trailer,TX1234,0.00\n",
        );
        let mut registry = Registry::new();

        let summary = load_all(&storage, "boats.csv", &mut registry).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 0 });

        let names: Vec<&str> = registry.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Jon Boat", "Sea Lion"]);
    }

    #[test]
    fn test_load_all_skips_blank_and_malformed_lines() {
        let storage = MemoryStorage::with_file(
            "boats.csv",
            "Sea Lion,21,slip,21,100.50\n\n   \nBad Line,20,dock,7,0.00\nshort,line\nKayak,10,storage,5,0.00\n",
        );
        let mut registry = Registry::new();

        let summary = load_all(&storage, "boats.csv", &mut registry).unwrap();
        assert_eq!(summary.loaded, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_load_all_skips_duplicate_names() {
        let storage = MemoryStorage::with_file(
            "boats.csv",
            "Sea Lion,21,slip,21,100.50\nSEA LION,30,land,A,0.00\n",
        );
        let mut registry = Registry::new();

        let summary = load_all(&storage, "boats.csv", &mut registry).unwrap();
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 1 });
        // First occurrence wins.
        assert_eq!(registry.find("sea lion").unwrap().length, 21.0);
    }

    #[test]
    fn test_load_all_stops_when_full() {
        let storage = MemoryStorage::with_file(
            "boats.csv",
            "Ark,20,slip,1,0.00\nBreeze,20,slip,2,0.00\nCutter,20,slip,3,0.00\n",
        );
        let mut registry = Registry::with_capacity(2);

        let summary = load_all(&storage, "boats.csv", &mut registry).unwrap();
        assert_eq!(summary.loaded, 2);
        assert_eq!(registry.len(), 2);
        assert!(registry.find("Cutter").is_none());
    }

    #[test]
    fn test_load_all_missing_file_is_an_error() {
        let storage = MemoryStorage::new();
        let mut registry = Registry::new();

        let result = load_all(&storage, "missing.csv", &mut registry);
        assert!(matches!(result, Err(MarinaError::IoError(_))));
    }

    #[test]
    fn test_save_all_writes_sorted_lines() {
        let storage = MemoryStorage::with_file(
            "boats.csv",
            "Sea Lion,21,slip,21,100.50\nJon Boat,14,trailer,TX1234,0.00\n",
        );
        let mut registry = Registry::new();
        load_all(&storage, "boats.csv", &mut registry).unwrap();

        save_all(&storage, "out.csv", &registry).unwrap();
        assert_eq!(
            storage.contents("out.csv").unwrap(),
            "Jon Boat,14,trailer,TX1234,0.00\nSea Lion,21,slip,21,100.50\n"
        );
    }

    #[test]
    fn test_save_all_empty_registry_writes_empty_file() {
        let storage = MemoryStorage::new();
        let registry = Registry::new();

        save_all(&storage, "out.csv", &registry).unwrap();
        assert_eq!(storage.contents("out.csv").unwrap(), "");
    }
}
