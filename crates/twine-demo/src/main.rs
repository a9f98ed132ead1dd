//! 动态缓冲演示入口：展示固定容量截断、按块扩容与显式容量调整，
//! 并用十万字节拼接对照长度记账与重扫式追加的成本差异。
//!
//! # 使用方法
//! ```bash
//! cargo run -p twine-demo
//! ```
//! 无命令行参数。输出分四段：固定容量演示、可选槽位演示、按块扩容演示、
//! 计时对照。
//!
//! # 设计要点（Why）
//! - 每步都打印容量 / 长度 / 余量三元组，让“截断发生在哪”一目了然；
//! - 计时对照两侧写入完全相同的字节量，差异只剩“重扫定位结尾”那部分开销；
//! - 演示程序恒以退出码 0 结束：失败（例如十万字节预留被分配器拒绝）经
//!   标准错误输出诊断后照常收尾，不向脚本环境放大为非零退出。

use std::time::Instant;

use twine_core::{DynamicBuffer, Result};

/// 计时对照的目标容量。
const TIMED_CAPACITY: usize = 100_000;

fn main() {
    if let Err(error) = run() {
        eprintln!("演示提前结束: {error} (code={})", error.code());
    }
}

fn run() -> Result<()> {
    demonstrate_fixed_capacity()?;
    demonstrate_optional_slot()?;
    demonstrate_block_growth()?;
    compare_append_strategies()?;
    Ok(())
}

/// 打印缓冲当前快照，内容以有损 UTF-8 呈现（演示负载均为 ASCII）。
fn report(stage: &str, buf: &DynamicBuffer) {
    println!(
        "  {stage}: 容量 {} / 长度 {} / 余量 {} / 内容 {:?}",
        buf.capacity(),
        buf.len(),
        buf.headroom(),
        String::from_utf8_lossy(buf.as_slice())
    );
}

/// 固定容量轨道：演示静默截断、写满、覆写与清空。
fn demonstrate_fixed_capacity() -> Result<()> {
    println!("== 固定容量：静默截断 ==");
    let mut buf = DynamicBuffer::with_capacity(7)?;
    report("构造后", &buf);

    let written = buf.append(b"Text");
    println!("追加 \"Text\" -> 写入 {written} 字节");
    report("追加后", &buf);

    let written = buf.append(b"Text");
    println!("追加 \"Text\" -> 写入 {written} 字节（余量不足，尾部被丢弃）");
    report("截断后", &buf);

    let written = buf.append(b"1234");
    println!("追加 \"1234\" -> 写入 {written} 字节（已写满）");

    let written = buf.overwrite(b"1234");
    println!("覆写 \"1234\" -> 写入 {written} 字节（整段容量重新可用）");
    report("覆写后", &buf);

    buf.clear();
    report("清空后", &buf);

    drop(buf);
    println!("缓冲随 drop 释放，原绑定自此不可再用");
    Ok(())
}

/// 可选槽位：用 `Option<DynamicBuffer>` 表达“尚未初始化 / 已释放”的句柄形态。
///
/// 查询经 `Option` 组合子返回，无需哨兵值：空槽位的长度是 `None`，
/// “是否为空”对空槽位恒为真。
fn demonstrate_optional_slot() -> Result<()> {
    println!("\n== 可选槽位：未初始化与释放后的形态 ==");
    let mut slot: Option<DynamicBuffer> = None;
    println!(
        "  未初始化: 长度 {:?} / 是否为空 {}",
        slot.as_ref().map(DynamicBuffer::len),
        slot.as_ref().map_or(true, DynamicBuffer::is_empty)
    );

    let mut buf = DynamicBuffer::with_capacity(16)?;
    buf.append(b"present");
    slot = Some(buf);
    if let Some(live) = slot.as_ref() {
        report("初始化后", live);
    }

    slot = None;
    println!(
        "  释放后: 长度 {:?} / 是否为空 {}",
        slot.as_ref().map(DynamicBuffer::len),
        slot.as_ref().map_or(true, DynamicBuffer::is_empty)
    );
    Ok(())
}

/// 按块扩容轨道：演示完整写入、取整后的容量，以及显式收缩与拒绝。
fn demonstrate_block_growth() -> Result<()> {
    println!("\n== 按块扩容：完整写入 ==");
    let mut buf = DynamicBuffer::with_capacity(10)?;
    buf.overwrite(b"Short");
    report("初始内容", &buf);

    let tail = b" extended well beyond the declared capacity";
    let written = buf.append_growing(tail, 32);
    println!("按块追加 {} 字节（块大小 32）-> 写入 {written} 字节", tail.len());
    report("扩容后", &buf);

    match buf.resize(3) {
        Err(error) => println!("请求收缩到 3 被拒绝: {error} (code={})", error.code()),
        Ok(()) => println!("收缩到 3 意外成功"),
    }

    buf.resize(buf.len() + 1)?;
    report("收缩到 len + 1 后", &buf);
    Ok(())
}

/// 十万字节拼接对照：同负载同终止条件，只比定位方式。
fn compare_append_strategies() -> Result<()> {
    println!("\n== 十万字节拼接计时对照 ==");
    let payload = b"1234";

    let tracked_start = Instant::now();
    let mut buf = DynamicBuffer::with_capacity(TIMED_CAPACITY)?;
    buf.overwrite(b"Text");
    while buf.headroom() >= payload.len() {
        buf.append(payload);
    }
    let tracked = tracked_start.elapsed();
    println!(
        "长度记账追加: 最终长度 {} / 耗时 {:.6} 秒",
        buf.len(),
        tracked.as_secs_f64()
    );

    let rescan_start = Instant::now();
    let mut naive = RescanBuffer::new(TIMED_CAPACITY);
    naive.append(b"Text");
    while naive.headroom() >= payload.len() {
        naive.append(payload);
    }
    let rescan = rescan_start.elapsed();
    println!(
        "重扫式追加:   最终长度 {} / 耗时 {:.6} 秒",
        naive.written(),
        rescan.as_secs_f64()
    );

    let tracked_secs = tracked.as_secs_f64();
    if tracked_secs > 0.0 {
        println!(
            "加速比（重扫 / 记账）: {:.1}x",
            rescan.as_secs_f64() / tracked_secs
        );
    } else {
        println!("记账耗时低于计时精度，加速比不具参考意义");
    }
    Ok(())
}

/// 对照基线：零初始化定长存储，以首个零字节为终结符，每次操作前重扫。
///
/// 截断规则与 `DynamicBuffer` 一致（始终为终结符保留一个槽位），
/// 因此两侧在相同终止条件下写入的字节总量相同。
///
/// `twine-core/benches/append_throughput.rs` 持有一份同构基线：两份
/// 拷贝的截断与扫描规则必须同步修改，否则基准与演示的对照口径漂移。
struct RescanBuffer {
    storage: Vec<u8>,
}

impl RescanBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity],
        }
    }

    fn end(&self) -> usize {
        self.storage
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.storage.len())
    }

    fn headroom(&self) -> usize {
        self.storage.len().saturating_sub(self.end() + 1)
    }

    fn append(&mut self, bytes: &[u8]) -> usize {
        let mut end = self.end();
        let mut written = 0;
        while written < bytes.len() && end + 1 < self.storage.len() {
            self.storage[end] = bytes[written];
            end += 1;
            written += 1;
        }
        written
    }

    fn written(&self) -> usize {
        self.end()
    }
}
