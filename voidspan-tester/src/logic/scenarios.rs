//! Rule scenarios played against scripted or flaky oracles.
use std::collections::HashSet;
use std::fmt;
use std::fmt::Debug;
use thiserror::Error;

use voidspan_game::constants::{INITIAL_SANITY, INITIAL_TIME_YEARS, SANITY_FLOOR};
use voidspan_game::{
    ApiError, Difficulty, EndingResult, GameState, GameStatus, GeminiOracle, OracleConfig,
    PurchaseError, RetryPolicy, TurnError, VoidOracle, VoidRun, group_digits,
};

use super::backend::FlakyBackend;
use super::oracle::ScriptedOracle;

/// Purchases after which a marathon counts as stuck.
const MARATHON_LIMIT: usize = 40;

#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("{what}: expected {expected}, got {actual}")]
    Mismatch {
        what: &'static str,
        expected: String,
        actual: String,
    },
    #[error("purchase failed: {0}")]
    Purchase(#[from] PurchaseError),
    #[error("{0}")]
    Violated(String),
}

fn expect_eq<T: PartialEq + Debug>(
    what: &'static str,
    expected: T,
    actual: T,
) -> Result<(), CheckFailure> {
    if expected == actual {
        Ok(())
    } else {
        Err(CheckFailure::Mismatch {
            what,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

fn ensure(cond: bool, message: impl FnOnce() -> String) -> Result<(), CheckFailure> {
    if cond {
        Ok(())
    } else {
        Err(CheckFailure::Violated(message()))
    }
}

/// Where a scenario left the run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub purchases: usize,
    pub status: GameStatus,
    pub remaining_time: u64,
    pub remaining_money: i64,
    pub sanity: i32,
    pub ending: Option<String>,
}

impl RunSummary {
    fn of(state: &GameState) -> Self {
        Self {
            purchases: state.turn(),
            status: state.status,
            remaining_time: state.remaining_time,
            remaining_money: state.remaining_money,
            sanity: state.sanity,
            ending: state
                .ending
                .as_ref()
                .map(|e| format!("{} [{}]", e.title, e.grade)),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} purchases, {} years left, ¥{} left, sanity {}",
            self.status,
            self.purchases,
            group_digits(i128::from(self.remaining_time)),
            group_digits(i128::from(self.remaining_money)),
            self.sanity
        )?;
        if let Some(ending) = &self.ending {
            write!(f, ", ending {ending}")?;
        }
        Ok(())
    }
}

/// Bookkeeping every state must satisfy whatever the oracle said.
fn check_ledger(state: &GameState) -> Result<(), CheckFailure> {
    expect_eq(
        "remaining time",
        INITIAL_TIME_YEARS.saturating_sub(state.total_years_killed()),
        state.remaining_time,
    )?;
    expect_eq(
        "remaining money",
        state.initial_money() - state.total_spent(),
        state.remaining_money,
    )?;
    ensure(
        (SANITY_FLOOR..=INITIAL_SANITY).contains(&state.sanity),
        || format!("sanity {} out of range", state.sanity),
    )?;
    let ids: HashSet<&str> = state.history.iter().map(|h| h.id.as_str()).collect();
    expect_eq("distinct entry ids", state.history.len(), ids.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicScenario {
    Smoke,
    ForbiddenItem,
    Bankruptcy,
    Marathon,
    RetryRecovery,
    RetryGiveup,
}

impl LogicScenario {
    pub const ALL: [Self; 6] = [
        Self::Smoke,
        Self::ForbiddenItem,
        Self::Bankruptcy,
        Self::Marathon,
        Self::RetryRecovery,
        Self::RetryGiveup,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::ForbiddenItem => "forbidden-item",
            Self::Bankruptcy => "bankruptcy",
            Self::Marathon => "marathon",
            Self::RetryRecovery => "retry-recovery",
            Self::RetryGiveup => "retry-giveup",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "One ordinary purchase keeps the run going",
            Self::ForbiddenItem => "Buying a time-skip item collapses sanity at once",
            Self::Bankruptcy => "Overspending ends the run and the ending falls back",
            Self::Marathon => "Keep buying until the 500 million years are gone",
            Self::RetryRecovery => "Overloaded replies are retried until the purchase lands",
            Self::RetryGiveup => "A provider that never recovers leaves the run untouched",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Play the scenario with `seed` and check its expectations.
    pub async fn run(self, seed: u64) -> Result<RunSummary, CheckFailure> {
        match self {
            Self::Smoke => smoke(seed).await,
            Self::ForbiddenItem => forbidden_item(seed).await,
            Self::Bankruptcy => bankruptcy(seed).await,
            Self::Marathon => marathon(seed).await,
            Self::RetryRecovery => retry_recovery(seed).await,
            Self::RetryGiveup => retry_giveup().await,
        }
    }
}

async fn smoke(seed: u64) -> Result<RunSummary, CheckFailure> {
    let mut run = VoidRun::new(ScriptedOracle::new(seed), Difficulty::Normal);
    let item = run.oracle().pick_item();
    let outcome = run.purchase(item).await?;

    expect_eq("status", GameStatus::Playing, outcome.status)?;
    expect_eq("purchases", 1, run.state().turn())?;
    ensure(outcome.years_killed > 0, || "no time passed".to_string())?;
    ensure(outcome.money_spent > 0, || "purchase was free".to_string())?;
    ensure(run.conclude().await.is_none(), || {
        "ending written for a live run".to_string()
    })?;
    check_ledger(run.state())?;
    Ok(RunSummary::of(run.state()))
}

async fn forbidden_item(seed: u64) -> Result<RunSummary, CheckFailure> {
    let mut run = VoidRun::new(ScriptedOracle::new(seed), Difficulty::Easy);
    let outcome = run.purchase("  タイムマシン ").await?;

    expect_eq("status", GameStatus::LostSanity, outcome.status)?;
    expect_eq("years killed", 0, outcome.years_killed)?;
    expect_eq("sanity", SANITY_FLOOR, run.state().sanity)?;
    expect_eq("stored name", "タイムマシン", run.state().history[0].item_name.as_str())?;

    let err = run.purchase("ボールペン").await.err();
    expect_eq(
        "purchase after the end",
        Some(PurchaseError::Turn(TurnError::AlreadyOver)),
        err,
    )?;

    let ending = run.conclude().await.cloned();
    ensure(ending.is_some(), || "no ending installed".to_string())?;
    ensure(!run.state().is_victory(), || "collapse counted as victory".to_string())?;
    check_ledger(run.state())?;
    Ok(RunSummary::of(run.state()))
}

async fn bankruptcy(seed: u64) -> Result<RunSummary, CheckFailure> {
    let oracle = ScriptedOracle::new(seed).spendthrift().failing_endings();
    let mut run = VoidRun::new(oracle, Difficulty::Normal);
    let item = run.oracle().pick_item();
    let outcome = run.purchase(item).await?;

    expect_eq("status", GameStatus::Bankrupt, outcome.status)?;
    ensure(run.state().remaining_money < 0, || {
        format!("money {} was clamped", run.state().remaining_money)
    })?;
    expect_eq(
        "ending",
        Some(EndingResult::fallback()),
        run.conclude().await.cloned(),
    )?;
    check_ledger(run.state())?;
    Ok(RunSummary::of(run.state()))
}

async fn marathon(seed: u64) -> Result<RunSummary, CheckFailure> {
    let difficulty = Difficulty::ALL[usize::try_from(seed % 3).unwrap_or(0)];
    let mut run = VoidRun::new(ScriptedOracle::new(seed), difficulty);
    let mut previous_time = run.state().remaining_time;

    while !run.state().is_game_over() {
        ensure(run.state().turn() < MARATHON_LIMIT, || {
            format!("still {} years left after {MARATHON_LIMIT} purchases", run.state().remaining_time)
        })?;
        let item = run.oracle().pick_item();
        run.purchase(item).await?;
        ensure(run.state().remaining_time < previous_time, || {
            format!("'{item}' did not advance time")
        })?;
        previous_time = run.state().remaining_time;
        check_ledger(run.state())?;
    }

    expect_eq("status", GameStatus::Completed, run.state().status)?;
    expect_eq("remaining time", 0, run.state().remaining_time)?;
    ensure(run.state().turn() > 4, || {
        format!("finished in only {} purchases", run.state().turn())
    })?;
    let grade = run.conclude().await.map(|e| e.grade);
    ensure(grade.is_some_and(|g| g.as_str() == "S" || g.as_str() == "A"), || {
        format!("victory graded {grade:?}")
    })?;
    Ok(RunSummary::of(run.state()))
}

fn flaky_run(failures: u32) -> VoidRun<GeminiOracle<FlakyBackend>> {
    let oracle = GeminiOracle::new(
        FlakyBackend::failing(failures),
        "scripted-key",
        OracleConfig::default(),
    );
    VoidRun::new(oracle, Difficulty::Normal)
}

async fn retry_recovery(seed: u64) -> Result<RunSummary, CheckFailure> {
    let policy = RetryPolicy::default();
    let failures = 1 + u32::try_from(seed % u64::from(policy.retries)).unwrap_or(0);
    let mut run = flaky_run(failures);
    let outcome = run.purchase("ボールペン").await?;

    expect_eq("years killed", 1_200_000, outcome.years_killed)?;
    expect_eq("money spent", 25_000, outcome.money_spent)?;
    let backend = run.oracle().backend();
    expect_eq("provider calls", 2 + failures, backend.calls())?;
    let sleeps = backend.sleeps();
    expect_eq("retries", usize::try_from(failures).unwrap_or(0), sleeps.len())?;
    let allowed: Vec<_> = (0..policy.retries).map(|r| policy.delay_for(r)).collect();
    ensure(sleeps.iter().all(|d| allowed.contains(d)), || {
        format!("unexpected back-off schedule {sleeps:?}")
    })?;
    check_ledger(run.state())?;
    Ok(RunSummary::of(run.state()))
}

async fn retry_giveup() -> Result<RunSummary, CheckFailure> {
    let mut run = flaky_run(u32::MAX);
    let before = run.state().clone();
    let err = run.purchase("ボールペン").await.err();

    ensure(
        matches!(&err, Some(PurchaseError::Api(ApiError::Status { code: 503, .. }))),
        || format!("expected an overloaded error, got {err:?}"),
    )?;
    ensure(!err.as_ref().is_some_and(PurchaseError::is_key_rejected), || {
        "overload mistaken for a rejected key".to_string()
    })?;
    expect_eq("state", &before, run.state())?;
    let attempts = RetryPolicy::default().retries + 1;
    ensure(run.oracle().backend().calls() >= attempts, || {
        format!("gave up after {} calls", run.oracle().backend().calls())
    })?;
    Ok(RunSummary::of(run.state()))
}

/// One purchase followed by the ledger checks.
pub async fn single_purchase<O: VoidOracle>(
    run: &mut VoidRun<O>,
    item: &str,
) -> Result<RunSummary, CheckFailure> {
    run.purchase(item).await?;
    check_ledger(run.state())?;
    Ok(RunSummary::of(run.state()))
}
