use async_trait::async_trait;
use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use voidspan_game::{
    ApiError, Difficulty, EndingDraft, EndingResult, GameState, GameStatus, Grade, ItemJudgement,
    PurchaseError, TurnError, VoidOracle, VoidRun, resolve_purchase,
};

/// Replays queued verdicts; counts every model call.
#[derive(Default)]
struct ScriptOracle {
    verdicts: RefCell<VecDeque<Result<ItemJudgement, ApiError>>>,
    image_fails: Cell<bool>,
    ending: RefCell<Option<Result<EndingDraft, ApiError>>>,
    calls: Cell<usize>,
    last_victory: Cell<Option<bool>>,
}

impl ScriptOracle {
    fn verdict(self, cost: f64, years: &str, sanity: f64) -> Self {
        self.verdicts.borrow_mut().push_back(Ok(ItemJudgement {
            cost,
            time_killed_years: years.to_string(),
            sanity_change: sanity,
            story: format!("spent {years} years"),
            synergy_analysis: "-".to_string(),
        }));
        self
    }

    fn failure(self, err: ApiError) -> Self {
        self.verdicts.borrow_mut().push_back(Err(err));
        self
    }

    fn ending(self, grade: &str) -> Self {
        *self.ending.borrow_mut() = Some(Ok(EndingDraft {
            title: "虚無の果て".to_string(),
            story: "...".to_string(),
            evaluation: "good".to_string(),
            score_grade: grade.to_string(),
        }));
        self
    }
}

#[async_trait(?Send)]
impl VoidOracle for ScriptOracle {
    async fn evaluate_item(
        &self,
        _item_name: &str,
        _state: &GameState,
    ) -> Result<ItemJudgement, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.verdicts
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("script exhausted".into())))
    }

    async fn generate_item_image(&self, item_name: &str) -> Result<String, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.image_fails.get() {
            return Err(ApiError::Status {
                code: 500,
                message: "image backend down".into(),
            });
        }
        Ok(format!("data:image/png;base64,{item_name}"))
    }

    async fn generate_ending(&self, _state: &GameState) -> Result<EndingDraft, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.ending
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Decode("no ending scripted".into())))
    }

    async fn generate_ending_image(&self, title: &str, victory: bool) -> Result<String, ApiError> {
        self.last_victory.set(Some(victory));
        Ok(format!("ending:{title}"))
    }
}

#[test]
fn purchases_accumulate_until_the_span_is_gone() {
    let oracle = ScriptOracle::default()
        .verdict(1_000.0, "100000000", -5.0)
        .verdict(2_000.0, "300,000,000", 3.0)
        .verdict(500.0, "200000000", 0.0)
        .ending("s");
    let mut run = VoidRun::new(oracle, Difficulty::Normal);

    let first = block_on(run.purchase("  文庫本 ")).unwrap();
    assert_eq!(first.status, GameStatus::Playing);
    assert_eq!(first.sanity_after, 95);
    let second = block_on(run.purchase("ルービックキューブ")).unwrap();
    assert_eq!(second.status, GameStatus::Playing);
    assert_eq!(run.state().remaining_time, 100_000_000);
    assert_eq!(run.state().remaining_money, 997_000);

    let last = block_on(run.purchase("将棋盤")).unwrap();
    assert!(last.ended_run());
    assert!(run.state().is_victory());
    assert_eq!(run.state().remaining_time, 0);

    let history = &run.state().history;
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].item_name, "文庫本");
    assert_eq!(history[0].image_url, "data:image/png;base64,文庫本");
    assert_ne!(history[0].id, history[1].id);

    let ending = block_on(run.conclude()).cloned().unwrap();
    assert_eq!(ending.grade, Grade::S);
    assert_eq!(ending.image_url, "ending:虚無の果て");
    assert_eq!(run.oracle().last_victory.get(), Some(true));
    assert_eq!(run.state().ending.as_ref(), Some(&ending));
}

#[test]
fn forbidden_item_collapses_sanity_in_one_turn() {
    let oracle = ScriptOracle::default().verdict(10.0, "0", -100.0);
    let mut run = VoidRun::new(oracle, Difficulty::Chicken);
    let outcome = block_on(run.purchase("5億年ボタン")).unwrap();
    assert_eq!(outcome.status, GameStatus::LostSanity);
    assert_eq!(run.state().remaining_time, 500_000_000);
    assert_eq!(run.state().sanity, 0);
}

#[test]
fn overspending_bankrupts_and_money_goes_negative() {
    let oracle = ScriptOracle::default().verdict(1_500_000.0, "10", 0.0);
    let mut run = VoidRun::new(oracle, Difficulty::Normal);
    let outcome = block_on(run.purchase("豪華客船")).unwrap();
    assert_eq!(outcome.status, GameStatus::Bankrupt);
    assert_eq!(run.state().remaining_money, -500_000);

    let err = block_on(run.purchase("more")).unwrap_err();
    assert_eq!(err, PurchaseError::Turn(TurnError::AlreadyOver));
}

#[test]
fn failed_calls_leave_state_untouched() {
    let oracle = ScriptOracle::default().failure(ApiError::Status {
        code: 404,
        message: "Requested entity was not found.".into(),
    });
    let mut run = VoidRun::new(oracle, Difficulty::Easy);
    let before = run.state().clone();

    let err = block_on(run.purchase("pen")).unwrap_err();
    assert!(err.is_key_rejected());
    assert_eq!(run.state(), &before);
}

#[test]
fn image_failure_fails_the_purchase_too() {
    let oracle = ScriptOracle::default().verdict(1.0, "1", 0.0);
    oracle.image_fails.set(true);
    let state = GameState::start(Difficulty::Normal);
    let err = block_on(resolve_purchase(&oracle, &state, "pen")).unwrap_err();
    assert!(matches!(err, PurchaseError::Api(ApiError::Status { code: 500, .. })));
}

#[test]
fn blank_input_never_reaches_the_oracle() {
    let mut run = VoidRun::new(ScriptOracle::default(), Difficulty::Normal);
    let err = block_on(run.purchase("   ")).unwrap_err();
    assert_eq!(err, PurchaseError::Turn(TurnError::EmptyItem));
    assert_eq!(run.oracle().calls.get(), 0);
}

#[test]
fn ending_failure_installs_fallback() {
    let oracle = ScriptOracle::default().verdict(1.0, "1", -100.0);
    let mut run = VoidRun::new(oracle, Difficulty::Normal);
    block_on(run.purchase("void")).unwrap();
    let ending = block_on(run.conclude()).cloned().unwrap();
    assert_eq!(ending, EndingResult::fallback());
    assert_eq!(ending.evaluation, "測定不能");
}
