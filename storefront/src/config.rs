use chrono_tz::Tz;
use std::path::PathBuf;

/// 店铺配置 - 门店身份与下单通道的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | STORE_NAME | La Italiana | 店名（出现在订单消息抬头） |
/// | PICKUP_ADDRESS | Abasolo 515, Col. Compositores | 自取地址 |
/// | WHATSAPP_NUMBER | 523411394483 | 订单投递的 WhatsApp 号码 |
/// | DELIVERY_FEE | 35 | 配送附加费（MXN 整数） |
/// | TIMEZONE | America/Mexico_City | 营业时间判定所用时区 |
/// | STATUS_TICK_SECS | 60 | 营业状态周期性重算间隔（秒） |
/// | WORK_DIR | /var/lib/pizzeria | 工作目录（购物车镜像等） |
/// | BANK_NAME | BBVA | 转账银行 |
/// | BANK_HOLDER | La Italiana | 转账户名 |
/// | BANK_CLABE | 012342015885272134 | 转账 CLABE |
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store display name, used in the order message header
    pub store_name: String,
    /// Fixed address substituted when fulfillment is pickup
    pub pickup_address: String,
    /// Destination number for the checkout handoff
    pub whatsapp_number: String,
    /// Fixed delivery surcharge, MXN
    pub delivery_fee: i64,
    /// Timezone for availability checks and the summary timestamp
    pub timezone: Tz,
    /// Interval of the periodic status recomputation
    pub status_tick_secs: u64,
    /// Working directory holding the durable cart mirror
    pub work_dir: String,
    /// Bank transfer destination shown for up-front payment
    pub bank: BankInfo,
}

/// Static payment destination details
#[derive(Debug, Clone)]
pub struct BankInfo {
    pub bank: String,
    pub holder: String,
    pub clabe: String,
}

impl StoreConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "La Italiana".into()),
            pickup_address: std::env::var("PICKUP_ADDRESS")
                .unwrap_or_else(|_| "Abasolo 515, Col. Compositores".into()),
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "523411394483".into()),
            delivery_fee: std::env::var("DELIVERY_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(35),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::America::Mexico_City),
            status_tick_secs: std::env::var("STATUS_TICK_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/pizzeria".into()),
            bank: BankInfo {
                bank: std::env::var("BANK_NAME").unwrap_or_else(|_| "BBVA".into()),
                holder: std::env::var("BANK_HOLDER").unwrap_or_else(|_| "La Italiana".into()),
                clabe: std::env::var("BANK_CLABE")
                    .unwrap_or_else(|_| "012342015885272134".into()),
            },
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the durable cart slot inside the working directory
    pub fn cart_mirror_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("cart.redb")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
