use serde::{Deserialize, Serialize};

/// 船隻的存放方式。封閉集合：新增種類必須改程式碼，所有使用端都要窮舉比對。
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Slip { number: i32 },
    Land { bay: char },
    Trailer { license: String },
    Storage { number: i32 },
}

impl Placement {
    /// 存放方式的小寫名稱，寫檔時使用
    pub fn kind_name(&self) -> &'static str {
        match self {
            Placement::Slip { .. } => "slip",
            Placement::Land { .. } => "land",
            Placement::Trailer { .. } => "trailer",
            Placement::Storage { .. } => "storage",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub name: String,
    pub length: f64,
    pub placement: Placement,
    pub amount_owed: f64,
}

/// 每月每呎費率（美元）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingRates {
    pub slip: f64,
    pub land: f64,
    pub trailer: f64,
    pub storage: f64,
}

impl Default for BillingRates {
    fn default() -> Self {
        Self {
            slip: 12.50,
            land: 14.00,
            trailer: 25.00,
            storage: 11.20,
        }
    }
}

impl BillingRates {
    pub fn rate_for(&self, placement: &Placement) -> f64 {
        match placement {
            Placement::Slip { .. } => self.slip,
            Placement::Land { .. } => self.land,
            Placement::Trailer { .. } => self.trailer,
            Placement::Storage { .. } => self.storage,
        }
    }
}
