use crate::domain::model::Boat;
use crate::utils::error::{MarinaError, Result};

pub const DEFAULT_CAPACITY: usize = 120;

/// 依船名（不分大小寫）排序的船隻清單，名稱在清單內唯一
#[derive(Debug, Clone)]
pub struct Registry {
    boats: Vec<Boat>,
    capacity: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boats: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.boats.len() >= self.capacity
    }

    /// 加入一艘船並維持排序；已滿或名稱重複（不分大小寫）時拒絕
    pub fn add(&mut self, boat: Boat) -> Result<()> {
        if self.is_full() {
            return Err(MarinaError::CapacityError {
                capacity: self.capacity,
            });
        }
        if self.find(&boat.name).is_some() {
            return Err(MarinaError::DuplicateNameError { name: boat.name });
        }
        self.boats.push(boat);
        self.boats.sort_by_key(|boat| sort_key(&boat.name));
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Boat> {
        let key = sort_key(name);
        self.boats.iter().find(|boat| sort_key(&boat.name) == key)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Boat> {
        let key = sort_key(name);
        self.boats
            .iter_mut()
            .find(|boat| sort_key(&boat.name) == key)
    }

    /// 依名稱移除（不分大小寫），找不到時回報錯誤
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let key = sort_key(name);
        match self
            .boats
            .iter()
            .position(|boat| sort_key(&boat.name) == key)
        {
            Some(index) => {
                self.boats.remove(index);
                Ok(())
            }
            None => Err(MarinaError::NotFoundError {
                name: name.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Boat> {
        self.boats.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Boat> {
        self.boats.iter_mut()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// 排序、查找、移除共用同一個大小寫摺疊，三者對「同名」的認定永遠一致
fn sort_key(name: &str) -> String {
    name.to_lowercase()
}
