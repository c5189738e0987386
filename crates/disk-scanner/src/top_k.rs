//! 按大小取前 K 个文件。
//!
//! `TopK` 用最小堆维护前 K（堆顶为当前排名最低者），O(N log K)，内存 O(K)。
//! `select_top_k_fold` 是逐条插入、稳定排序、截断的朴素做法，结果与堆完全一致，
//! 作为对照实现保留在测试中比较。
//!
//! 排序规则：大小降序；大小相同时先到的排在前面。

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use bigfiles_domain::FileRecord;

/// 带到达序号的候选项；排名高者 Ord 更大
#[derive(Debug)]
struct Ranked {
    seq: u64,
    record: FileRecord,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.record
            .size()
            .cmp(&other.record.size())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// 有界的前 K 大集合，增量消费输入
#[derive(Debug)]
pub struct TopK {
    limit: usize,
    seen: u64,
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopK {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: 0,
            heap: BinaryHeap::with_capacity(limit.saturating_add(1).min(1_000_000)),
        }
    }

    pub fn push(&mut self, record: FileRecord) {
        let seq = self.seen;
        self.seen += 1;
        if self.limit == 0 {
            return;
        }
        self.heap.push(Reverse(Ranked { seq, record }));
        while self.heap.len() > self.limit {
            self.heap.pop();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// 已推入的记录总数（含被淘汰的）
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// 按大小降序输出，同大小按到达顺序
    pub fn into_sorted_vec(self) -> Vec<FileRecord> {
        // Reverse 升序即排名降序
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| ranked.record)
            .collect()
    }
}

impl Extend<FileRecord> for TopK {
    fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

/// 取前 `k` 大文件（最小堆实现）
pub fn select_top_k<I>(records: I, k: usize) -> Vec<FileRecord>
where
    I: IntoIterator<Item = FileRecord>,
{
    let mut top = TopK::new(k);
    top.extend(records);
    log::debug!("[top_k] kept {} of {} records (k={})", top.len(), top.seen(), k);
    top.into_sorted_vec()
}

/// 同 [`select_top_k`]，但输入可能出错：遇到第一个 `Err` 立即停止并返回
pub fn try_select_top_k<I, E>(records: I, k: usize) -> Result<Vec<FileRecord>, E>
where
    I: IntoIterator<Item = Result<FileRecord, E>>,
{
    let mut top = TopK::new(k);
    for record in records {
        top.push(record?);
    }
    log::debug!("[top_k] kept {} of {} records (k={})", top.len(), top.seen(), k);
    Ok(top.into_sorted_vec())
}

/// 朴素折叠：每条记录插入后稳定排序并截断到 `k`，工作集最多 k+1 条
pub fn select_top_k_fold<I>(records: I, k: usize) -> Vec<FileRecord>
where
    I: IntoIterator<Item = FileRecord>,
{
    records.into_iter().fold(Vec::new(), |mut items, record| {
        items.push(record);
        items.sort_by(|a, b| b.size().cmp(&a.size()));
        items.truncate(k);
        items
    })
}
