//! 执行策略
//!
//! 启动时根据检测到的并行度选择一次 worker 池的类型和大小，
//! 之后作为可注入的值传给编排层（测试时可以注入确定性的策略）

use std::num::NonZeroUsize;

/// worker 池类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// 提取工作走 `spawn_blocking` 池（并行度充足时）
    Blocking,
    /// 提取工作直接在异步任务内执行
    Async,
}

/// 执行策略：池类型 + worker 数量
#[derive(Debug, Clone, Copy)]
pub struct ExecutionStrategy {
    pub kind: PoolKind,
    pub workers: usize,
}

impl ExecutionStrategy {
    /// 根据当前机器的并行度选择策略
    pub fn detect() -> Self {
        Self::from_parallelism(std::thread::available_parallelism().ok())
    }

    /// 根据给定的并行度选择策略
    ///
    /// 并行度 >= 4 时使用 blocking 池，否则在异步任务内执行；
    /// worker 数量为 min(并行度, 8)，并行度未知时为 2
    pub fn from_parallelism(parallelism: Option<NonZeroUsize>) -> Self {
        match parallelism {
            Some(n) => {
                let n = n.get();
                Self {
                    kind: if n >= 4 {
                        PoolKind::Blocking
                    } else {
                        PoolKind::Async
                    },
                    workers: n.min(8),
                }
            }
            None => Self {
                kind: PoolKind::Async,
                workers: 2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> Option<NonZeroUsize> {
        NonZeroUsize::new(n)
    }

    #[test]
    fn test_low_parallelism_uses_async_pool() {
        let s = ExecutionStrategy::from_parallelism(nz(1));
        assert_eq!(s.kind, PoolKind::Async);
        assert_eq!(s.workers, 1);

        let s = ExecutionStrategy::from_parallelism(nz(2));
        assert_eq!(s.kind, PoolKind::Async);
        assert_eq!(s.workers, 2);
    }

    #[test]
    fn test_high_parallelism_uses_blocking_pool() {
        let s = ExecutionStrategy::from_parallelism(nz(4));
        assert_eq!(s.kind, PoolKind::Blocking);
        assert_eq!(s.workers, 4);

        let s = ExecutionStrategy::from_parallelism(nz(8));
        assert_eq!(s.kind, PoolKind::Blocking);
        assert_eq!(s.workers, 8);
    }

    #[test]
    fn test_workers_capped_at_eight() {
        let s = ExecutionStrategy::from_parallelism(nz(16));
        assert_eq!(s.kind, PoolKind::Blocking);
        assert_eq!(s.workers, 8);
    }

    #[test]
    fn test_undetermined_parallelism() {
        let s = ExecutionStrategy::from_parallelism(None);
        assert_eq!(s.kind, PoolKind::Async);
        assert_eq!(s.workers, 2);
    }
}
