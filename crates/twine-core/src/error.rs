//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 为缓冲核心对外暴露的可恢复失败提供集中定义：容量参数非法、存储预留被
//!   分配器拒绝、显式调整容量时收缩越过现有内容；
//! - 三类失败都以显式返回值交还给直接调用方，库内不 panic、不终止进程，
//!   失败路径上缓冲内容与容量保持原样。
//!
//! ## 设计要求（What）
//! - 启用 `std` 特性时派生 `thiserror::Error`，与生态 `std::error::Error` 兼容；
//!   `no_std + alloc` 轨道则提供等价的手写 `Display`；
//! - 每个变体经 [`BufferError::code`] 映射到 [`codes`] 中的稳定字符串码，
//!   遵循 `<域>.<语义>` 命名约定，供日志与指标聚合；
//! - 静默截断**不在**此错误域内：固定容量追加复制不下时短计数返回，这是
//!   文档化的既定行为而非失败。
//!
//! ## 所有权边界（How）
//! - C 风格 API 里“句柄为空”的哨兵分支在本 crate 中不复存在：缓冲被释放后
//!   绑定即失效，编译期排除使用已释放句柄的可能；需要“可能尚未初始化”形态的
//!   调用方请持有 `Option<DynamicBuffer>`。

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// 缓冲核心错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：聚合构造、扩容、显式调整容量路径上的可恢复失败，保证
///   调用方能以 `?` 或模式匹配统一处置；
/// - **契约 (What)**：
///   - 所有变体均为纯值语义（`Clone + Eq`），可安全跨线程传播；
///   - 任何返回本错误的操作都承诺失败时缓冲状态逐字节不变；
///   - 变体可经 [`code`](Self::code) 取得稳定错误码。
/// - **执行逻辑 (How)**：变体携带触发现场的数值上下文（请求容量、现有长度），
///   Display 文案直接内嵌这些数值辅助排障。
/// - **设计权衡 (Trade-offs)**：分配失败变体不保留 `TryReserveError` 根因——
///   该类型各版本间携带信息有限，保留请求字节数即可支撑定位，同时让错误
///   保持 `Eq` 与 `no_std` 友好。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BufferError {
    /// 请求的容量为零。
    ///
    /// - **意图 (Why)**：容量必须至少容纳一个终结符槽位，零容量缓冲没有
    ///   合法状态；
    /// - **契约 (What)**：构造与 `resize` 在任何其它校验之前先拒绝零容量。
    #[cfg_attr(feature = "std", error("buffer capacity must be positive"))]
    ZeroCapacity,

    /// 分配器拒绝了存储预留请求。
    ///
    /// - **意图 (Why)**：把内存不足表达为可恢复值，调用方可以降级、重试或
    ///   继续使用现有容量；
    /// - **契约 (What)**：`requested` 为本次想要达到的总容量字节数；失败时
    ///   既有内容与容量未被触碰。
    #[cfg_attr(
        feature = "std",
        error("failed to reserve {requested} bytes of buffer storage")
    )]
    AllocationFailed {
        /// 预留失败时请求的总容量字节数。
        requested: usize,
    },

    /// 显式调整容量时，目标值不超过现有内容长度。
    ///
    /// - **意图 (Why)**：收缩不得丢弃存活字节，且须为终结符保留一个槽位，
    ///   因此合法下界是 `len + 1`；
    /// - **契约 (What)**：`requested` 为目标容量，`len` 为拒绝时的内容长度；
    ///   调用后缓冲保持原容量与原内容。
    #[cfg_attr(
        feature = "std",
        error("capacity {requested} does not exceed live content length {len}")
    )]
    ShrinkBelowContent {
        /// 被拒绝的目标容量。
        requested: usize,
        /// 拒绝发生时的存活内容长度。
        len: usize,
    },
}

impl BufferError {
    /// 返回与变体对应的稳定错误码。
    ///
    /// # 教案式说明
    /// - **Why**：日志、指标与告警按字符串码聚合，不应依赖 `Debug` 输出或
    ///   文案措辞；
    /// - **What**：返回值恒为 [`codes`] 中登记的 `'static` 常量，跨版本保持
    ///   语义稳定；
    /// - **How**：简单模式匹配，无分配无副作用。
    pub fn code(&self) -> &'static str {
        match self {
            BufferError::ZeroCapacity => codes::INVALID_CAPACITY,
            BufferError::AllocationFailed { .. } => codes::ALLOC_FAILED,
            BufferError::ShrinkBelowContent { .. } => codes::SHRINK_BELOW_CONTENT,
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroCapacity => write!(f, "buffer capacity must be positive"),
            BufferError::AllocationFailed { requested } => {
                write!(f, "failed to reserve {requested} bytes of buffer storage")
            }
            BufferError::ShrinkBelowContent { requested, len } => write!(
                f,
                "capacity {requested} does not exceed live content length {len}"
            ),
        }
    }
}

/// 缓冲核心的稳定错误码常量集合，确保可观测性系统具有稳定识别符。
pub mod codes {
    /// 请求容量非法（当前仅零容量一种情形）。
    pub const INVALID_CAPACITY: &str = "buffer.invalid_capacity";
    /// 存储预留被分配器拒绝。
    pub const ALLOC_FAILED: &str = "buffer.alloc_failed";
    /// 容量调整目标不超过现有内容长度。
    pub const SHRINK_BELOW_CONTENT: &str = "buffer.shrink_below_content";
}

/// `Result` 为缓冲核心统一的返回值别名。
///
/// # 教案式说明
/// - **Why**：避免在各处重复书写 `Result<_, BufferError>` 样板，并提示调用方
///   本 crate 的失败边界只有一个错误域；
/// - **What**：与标准库 `Result` 行为完全一致，可直接配合 `?` 与模式匹配；
///   需要自定义错误类型时可显式指定第二个泛型参数；
/// - **Trade-offs**：统一别名意味着在泛型约束中需要写全 `twine_core::Result`，
///   换取调用点的一致性。
pub type Result<T, E = BufferError> = core::result::Result<T, E>;
