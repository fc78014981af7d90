//! 疑似処理パイプライン
//!
//! ステージを先頭から順に Active → Completed へ進めるだけの状態機械。
//! タイマーは持たず、呼び出し側が `next_delay_ms` 後に次の `advance` を呼ぶ。

use crate::types::{ProcessingStage, StageState};

/// 1ステージあたりの最小待ち時間（ミリ秒）
pub const STAGE_DELAY_BASE_MS: u32 = 2000;
/// 待ち時間に加えるランダム幅（ミリ秒）
pub const STAGE_DELAY_JITTER_MS: u32 = 1000;

/// [0, 1) の乱数源
pub trait Jitter {
    fn unit(&mut self) -> f64;
}

/// 常に同じ値を返す乱数源（テスト・再現用）
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

/// 次ステージまでの待ち時間を [2000, 3000) ミリ秒で求める
pub fn stage_delay_ms(jitter: &mut impl Jitter) -> u32 {
    let unit = jitter.unit().clamp(0.0, 1.0);
    let extra = (unit * f64::from(STAGE_DELAY_JITTER_MS)).floor() as u32;
    STAGE_DELAY_BASE_MS + extra.min(STAGE_DELAY_JITTER_MS - 1)
}

/// 1回分の処理実行（カーソルを保持）
///
/// 実行ごとに独立したカーソルを持つ。複数の実行が同時に進んでも
/// 互いのカーソルは干渉しない（ステージ表示は共有）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineRun {
    id: u64,
    cursor: usize,
}

impl PipelineRun {
    pub fn new(id: u64) -> Self {
        Self { id, cursor: 0 }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// `advance` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    /// ステージ `active` を開始。`next_delay_ms` 後に再度 `advance` する
    Advance { active: usize, next_delay_ms: u32 },
    /// 全ステージ完了
    Finished,
}

/// すべてのステージを Pending に戻す
pub fn reset_stages(stages: &mut [ProcessingStage]) {
    for stage in stages.iter_mut() {
        stage.state = StageState::Pending;
    }
}

/// 1ティック進める
pub fn advance(
    stages: &mut [ProcessingStage],
    run: &mut PipelineRun,
    jitter: &mut impl Jitter,
) -> PipelineStep {
    if run.cursor < stages.len() {
        for stage in &mut stages[..run.cursor] {
            stage.state = StageState::Completed;
        }
        stages[run.cursor].state = StageState::Active;

        let active = run.cursor;
        run.cursor += 1;
        PipelineStep::Advance {
            active,
            next_delay_ms: stage_delay_ms(jitter),
        }
    } else {
        for stage in stages.iter_mut() {
            stage.state = StageState::Completed;
        }
        PipelineStep::Finished
    }
}

/// 進捗率（完了ステージ数 / 全ステージ数）
pub fn progress(stages: &[ProcessingStage]) -> f32 {
    if stages.is_empty() {
        return 0.0;
    }
    let completed = stages
        .iter()
        .filter(|s| s.state == StageState::Completed)
        .count();
    completed as f32 / stages.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(n: usize) -> Vec<ProcessingStage> {
        (0..n).map(|i| ProcessingStage::new(format!("stage {}", i))).collect()
    }

    #[test]
    fn test_stage_delay_range() {
        assert_eq!(stage_delay_ms(&mut FixedJitter(0.0)), 2000);
        assert_eq!(stage_delay_ms(&mut FixedJitter(0.5)), 2500);
        assert_eq!(stage_delay_ms(&mut FixedJitter(0.9999)), 2999);
        // 1.0 は範囲外だが上限未満に収める
        assert_eq!(stage_delay_ms(&mut FixedJitter(1.0)), 2999);
    }

    #[test]
    fn test_walks_stages_in_order() {
        let mut stages = stages(3);
        let mut run = PipelineRun::new(1);
        let mut jitter = FixedJitter(0.25);

        for expected in 0..3 {
            let step = advance(&mut stages, &mut run, &mut jitter);
            assert_eq!(
                step,
                PipelineStep::Advance { active: expected, next_delay_ms: 2250 }
            );
            for (i, stage) in stages.iter().enumerate() {
                let want = match i.cmp(&expected) {
                    std::cmp::Ordering::Less => StageState::Completed,
                    std::cmp::Ordering::Equal => StageState::Active,
                    std::cmp::Ordering::Greater => StageState::Pending,
                };
                assert_eq!(stage.state, want, "tick {} stage {}", expected, i);
            }
        }

        assert_eq!(advance(&mut stages, &mut run, &mut jitter), PipelineStep::Finished);
        assert!(stages.iter().all(|s| s.state == StageState::Completed));
    }

    #[test]
    fn test_stage_never_active_before_previous_completed() {
        let mut stages = stages(5);
        let mut run = PipelineRun::new(1);
        let mut jitter = FixedJitter(0.0);

        while let PipelineStep::Advance { active, .. } = advance(&mut stages, &mut run, &mut jitter) {
            if active > 0 {
                assert_eq!(stages[active - 1].state, StageState::Completed);
            }
        }
    }

    #[test]
    fn test_empty_pipeline_finishes_immediately() {
        let mut stages = stages(0);
        let mut run = PipelineRun::new(1);
        assert_eq!(
            advance(&mut stages, &mut run, &mut FixedJitter(0.0)),
            PipelineStep::Finished
        );
    }

    #[test]
    fn test_progress() {
        let mut stages = stages(4);
        assert_eq!(progress(&stages), 0.0);
        stages[0].state = StageState::Completed;
        stages[1].state = StageState::Active;
        assert_eq!(progress(&stages), 0.25);
        assert_eq!(progress(&[]), 0.0);
    }

    #[test]
    fn test_reset_stages() {
        let mut stages = stages(2);
        stages[0].state = StageState::Completed;
        stages[1].state = StageState::Active;
        reset_stages(&mut stages);
        assert!(stages.iter().all(|s| s.state == StageState::Pending));
    }
}
