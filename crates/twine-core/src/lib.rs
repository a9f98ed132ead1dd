#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # twine-core
//!
//! ## 定位与职责（Why）
//! - 提供一个**容量声明式**的动态字节缓冲 [`DynamicBuffer`]：长度与容量作为独立
//!   标量随缓冲一起维护，追加内容时无需重新扫描已有字节求长度，从而把重复拼接
//!   的成本从 O(n²) 压到均摊 O(1)；
//! - 面向只需要“快速反复拼接”的调用方，刻意不提供通用字符串类型的全部能力，
//!   保持核心小而可审计。
//!
//! ## 行为概览（How）
//! - 固定容量路径：[`DynamicBuffer::append`] 在剩余余量内**静默截断**复制，绝不
//!   扩容，也绝不报错——截断是文档化的既定行为；
//! - 扩容路径：[`DynamicBuffer::append_growing`] 按调用方给定的块大小，将容量
//!   向上取整到所需字节数的最小块倍数；扩容被拒时退化为截断复制，已有内容
//!   保持原样；
//! - 显式调整：[`DynamicBuffer::resize`] 把容量改为精确值，拒绝收缩到不足以容纳
//!   现有内容加一个终结符槽位的水平。
//!
//! ## 契约要点（What）
//! - 容量包含一个保留的终结符槽位，因此任何时刻 `len() <= capacity() - 1`；
//! - 声明容量由缓冲自身记账，不回读分配器的“至少”承诺，保证
//!   `capacity()` 与构造/扩容请求值逐字节一致；
//! - 所有可能搬迁存储的操作都要求 `&mut self`，借用检查器随之废除先前发出的
//!   全部切片视图，旧地址不可能被继续观察。
//!
//! ## Feature 策略（Trade-offs）
//! - `std`（默认）：启用 `thiserror` 派生，错误类型与生态 `std::error::Error`
//!   互通；
//! - `alloc`：供 `no_std + alloc` 环境使用，错误类型改走手写 `Display`；
//!   缓冲核心自身只依赖 `alloc::vec::Vec`，不引入任何同步原语或运行时。

extern crate alloc;

mod dynamic;

/// 错误类型与稳定错误码的集中声明处。
///
/// - **意图说明 (Why)**：把“容量非法 / 分配被拒 / 收缩越过内容”三类可恢复失败
///   统一建模，避免调用点散落各自的判错逻辑；
/// - **契约定位 (What)**：每个变体都映射到 `error::codes` 中的稳定字符串码，
///   便于日志与告警按 `<域>.<语义>` 聚合；
/// - **风险提示 (Trade-offs)**：截断不属于错误分类——它是固定容量追加的既定
///   行为，调用方必须通过返回的复制计数感知。
pub mod error;

pub use dynamic::DynamicBuffer;
pub use error::{BufferError, Result};
