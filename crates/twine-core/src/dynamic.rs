//! # dynamic 模块说明
//!
//! ## 角色定位（Why）
//! - 提供 [`DynamicBuffer`]：显式记录内容长度与声明容量的字节缓冲，追加时
//!   直接定位写入点，摆脱“每次拼接先全量扫描找结尾”的 O(n) 税；
//! - 同一类型同时覆盖两种容量纪律：固定容量下静默截断，或按块粒度向上
//!   取整扩容后完整写入。
//!
//! ## 核心不变量（What）
//! - `len < capacity` 恒成立：声明容量中始终预留一个终结符槽位，可写上限
//!   为 `capacity - 1`；
//! - 声明容量只经构造、成功扩容与显式调整变更，读取路径与截断追加绝不
//!   触碰它；
//! - 失败（构造参数非法、分配被拒、收缩越过内容）一律以 `Result` 交还，
//!   缓冲保持调用前状态。
//!
//! ## 实现途径（How）
//! - 底层存储为 `Vec<u8>`，但**声明容量单独记账**：分配器实际预留多少不参与
//!   任何契约判断，`try_reserve_exact` 保证声明范围内的写入不触发隐式再分配；
//! - 扩容目标 = `ceil((len + 新增 + 1) / block) * block`，算术全程 checked，
//!   溢出与分配失败统一回退为截断追加。

use alloc::vec::Vec;
use core::fmt;

use crate::error::{BufferError, Result};

/// 容量追踪的动态字节缓冲。
///
/// # 教案式说明
/// - **意图 (Why)**：反复拼接短片段的场景中，朴素“扫描到结尾再复制”的做法
///   让总成本呈二次增长；本类型以一份长度记账换取每次追加摊还 O(1) 定位。
/// - **契约 (What)**：
///   - [`append`](Self::append) / [`overwrite`](Self::overwrite) 在声明容量内
///     尽量复制，返回实际写入字节数，放不下即静默截断；
///   - [`append_growing`](Self::append_growing) /
///     [`overwrite_growing`](Self::overwrite_growing) 在需要时按块取整扩容，
///     扩容成功则完整写入，失败退化为截断语义；
///   - [`resize`](Self::resize) 显式调整声明容量，收缩不丢字节；
///   - 任意时刻 `len() < capacity()`。
/// - **执行逻辑 (How)**：内容长度即 `Vec::len`，声明容量为独立字段；所有
///   写入先计算可写额度再一次 `extend_from_slice`，无中间拷贝。
/// - **设计取舍与风险 (Trade-offs)**：
///   - 截断是静默的，调用方必须检查返回的写入计数才能察觉丢弃；
///   - 扩容会移动底层存储，旧的切片借用随之失效——借用检查器在编译期
///     拒绝跨扩容持有 [`as_slice`](Self::as_slice) 结果，这正是预期保护。
pub struct DynamicBuffer {
    /// 存活内容；`data.len()` 即对外报告的长度。
    data: Vec<u8>,
    /// 声明容量（含终结符槽位），与分配器实际预留脱钩。
    capacity: usize,
}

impl DynamicBuffer {
    /// 以给定声明容量构造空缓冲。
    ///
    /// # 教案式说明
    /// - **Why**：容量是调用方的显式预算声明，构造即一次性预留，后续
    ///   非扩容操作不再触发分配；
    /// - **What**：`capacity` 含终结符槽位，可写上限为 `capacity - 1`；
    ///   零容量返回 [`BufferError::ZeroCapacity`]，预留被分配器拒绝返回
    ///   [`BufferError::AllocationFailed`]；
    /// - **How**：`try_reserve_exact` 申请精确容量，失败时不留下部分状态。
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self { data, capacity })
    }

    /// 在固定声明容量内追加字节，返回实际写入数。
    ///
    /// # 教案式说明
    /// - **Why**：写入点由长度记账直接给出，单次调用成本只与本次复制量
    ///   有关，与既有内容长度无关；
    /// - **What**：最多写入 [`headroom`](Self::headroom) 字节，超出部分静默
    ///   丢弃；返回值等于 `bytes.len()` 即完整写入；空输入恒返回 0 且不改
    ///   任何状态；
    /// - **How**：取 `headroom` 与输入长度的较小者做一次 `extend_from_slice`。
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let writable = self.headroom().min(bytes.len());
        self.data.extend_from_slice(&bytes[..writable]);
        writable
    }

    /// 追加字节，必要时按 `block_size` 的整数倍扩容。
    ///
    /// # 教案式说明
    /// - **Why**：批量摄入时调用方往往宁可扩容也不愿丢数据；按块取整让
    ///   连续追加的再分配次数随块大小摊薄；
    /// - **What**：
    ///   - 现有容量已能容纳 `len + bytes.len() + 1` 时不扩容、不移动存储；
    ///   - 需要扩容时目标为该需求量向上取整到 `block_size` 的最小整数倍，
    ///     成功后本次输入完整写入；
    ///   - `block_size == 0`、取整算术溢出或分配被拒时放弃扩容，回退为
    ///     固定容量的截断追加——返回值小于 `bytes.len()` 即发生了回退；
    /// - **How**：需求量与取整全程 checked 运算，任何一步失败都走同一条
    ///   回退路径，最后统一委托 [`append`](Self::append)。
    pub fn append_growing(&mut self, bytes: &[u8], block_size: usize) -> usize {
        if block_size > 0 {
            let required = self
                .data
                .len()
                .checked_add(bytes.len())
                .and_then(|total| total.checked_add(1));
            if let Some(required) = required {
                if required > self.capacity {
                    if let Some(target) = required.div_ceil(block_size).checked_mul(block_size) {
                        // 扩容失败不是错误：回退为截断追加，由返回值体现。
                        let _ = self.try_grow(target);
                    }
                }
            }
        }
        self.append(bytes)
    }

    /// 丢弃现有内容后在原容量内写入，返回实际写入数。
    ///
    /// 语义等价于 [`clear`](Self::clear) 紧接 [`append`](Self::append)：
    /// 整段声明容量重新可用，超出部分仍然静默截断。
    pub fn overwrite(&mut self, bytes: &[u8]) -> usize {
        self.data.clear();
        self.append(bytes)
    }

    /// 丢弃现有内容后写入，必要时按块扩容。
    ///
    /// 语义等价于 [`clear`](Self::clear) 紧接
    /// [`append_growing`](Self::append_growing)；注意扩容需求按**清空后**的
    /// 长度计算，因此旧内容再长也不会推高目标容量。
    pub fn overwrite_growing(&mut self, bytes: &[u8], block_size: usize) -> usize {
        self.data.clear();
        self.append_growing(bytes, block_size)
    }

    /// 清空内容，声明容量保持不变。
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// 显式调整声明容量。
    ///
    /// # 教案式说明
    /// - **Why**：长生命周期缓冲在峰值过后应能归还储备，扩容路径之外也
    ///   需要一个不经追加的容量调整入口；
    /// - **What**：
    ///   - `new_capacity == 0` 返回 [`BufferError::ZeroCapacity`]；
    ///   - `new_capacity <= len()` 返回 [`BufferError::ShrinkBelowContent`]，
    ///     收缩永不丢弃存活字节，且终结符槽位必须保留；
    ///   - 放大失败返回 [`BufferError::AllocationFailed`]；
    ///   - 任何失败路径上内容与容量逐字节不变；
    /// - **How**：放大走与自动扩容相同的预留路径；收缩更新声明容量并向
    ///   分配器提出 `shrink_to` 归还建议——契约只约束声明值，物理预留是否
    ///   立即回落由分配器决定。
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        if new_capacity <= self.data.len() {
            return Err(BufferError::ShrinkBelowContent {
                requested: new_capacity,
                len: self.data.len(),
            });
        }
        if new_capacity > self.capacity {
            self.try_grow(new_capacity)
        } else {
            self.data.shrink_to(new_capacity);
            self.capacity = new_capacity;
            Ok(())
        }
    }

    /// 当前内容长度（字节）。
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 内容是否为空。
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 当前声明容量（字节，含终结符槽位）。
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 再发生截断前还能写入的字节数，即 `capacity - len - 1`。
    pub fn headroom(&self) -> usize {
        self.capacity.saturating_sub(self.data.len() + 1)
    }

    /// 以只读切片视角访问存活内容。
    ///
    /// 借用存续期间无法调用任何 `&mut self` 方法，扩容导致的存储搬移
    /// 因此不可能悬挂旧视图。
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// 预留到 `target` 声明容量；失败时状态不变。
    fn try_grow(&mut self, target: usize) -> Result<()> {
        debug_assert!(target > self.capacity, "扩容目标必须严格大于现有声明容量");
        let additional = target - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| BufferError::AllocationFailed { requested: target })?;
        self.capacity = target;
        Ok(())
    }
}

impl AsRef<[u8]> for DynamicBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for DynamicBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
