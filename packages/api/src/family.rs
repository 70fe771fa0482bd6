//! Family lifecycle flows: create, join, load and start questions.
//!
//! Calls inside one flow are strictly sequenced. Create and join refresh the
//! user only after the family call succeeded, then reload the family, so the
//! returned [`FamilyOverview`] always reflects the server's view.

use store::{normalize_join_code, FamilyPhase, Family, FamilyQuestion, SessionChange, StartControl, UserInfo};

use crate::backend::{ApiResult, Backend};
use crate::error::ApiError;
use crate::question::today;
use crate::session::refresh_user;

pub const CREATE_FAILED: &str = "Could not create a family. Please try again.";
pub const JOIN_FAILED: &str = "Could not join the family. Please check the code.";
pub const START_FAILED: &str = "Could not start questions. Please try again.";
pub const LOAD_FAILED: &str = "Could not load your family.";

/// Everything the home view needs to pick a sub-view.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyOverview {
    pub phase: FamilyPhase,
    pub family: Option<Family>,
    /// Today's question; only fetched in the [`FamilyPhase::Active`] phase.
    /// `None` there means no question was assigned today, or `today_error`
    /// says why it could not be fetched.
    pub today: Option<FamilyQuestion>,
    pub today_error: Option<ApiError>,
}

impl FamilyOverview {
    fn without_family() -> Self {
        Self {
            phase: FamilyPhase::NoFamily,
            family: None,
            today: None,
            today_error: None,
        }
    }
}

/// Resolve the family phase for `user`, loading the family and, once
/// questions have started, today's question.
pub async fn load_overview<B: Backend>(backend: &B, user: &UserInfo) -> ApiResult<FamilyOverview> {
    if !user.has_family() {
        return Ok(FamilyOverview::without_family());
    }

    let family = backend.my_family().await?;
    let phase = FamilyPhase::of(user, Some(&family));
    tracing::debug!("Family {} is in phase {:?}", family.family_code, phase);

    let (today, today_error) = match phase {
        FamilyPhase::Active => fetch_today(backend).await,
        FamilyPhase::NoFamily | FamilyPhase::NotStarted => (None, None),
    };

    Ok(FamilyOverview {
        phase,
        family: Some(family),
        today,
        today_error,
    })
}

/// Today's question, keeping a fetch failure beside the result so the
/// family that was already loaded is not thrown away.
async fn fetch_today<B: Backend>(backend: &B) -> (Option<FamilyQuestion>, Option<ApiError>) {
    match today(backend).await {
        Ok(question) => (question, None),
        Err(e) => {
            tracing::warn!("Could not load today's question: {}", e);
            (None, Some(e))
        }
    }
}

/// Result of create/join: the session change from refreshing the user plus
/// the reloaded family.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub change: SessionChange,
    pub family: Option<Family>,
}

pub async fn create<B: Backend>(backend: &B) -> ApiResult<Membership> {
    let created = backend.create_family().await?;
    tracing::info!("Created family {}", created.family_code);
    after_membership_change(backend).await
}

/// Join by code. The code is normalized first; an empty code is rejected
/// without contacting the backend.
pub async fn join<B: Backend>(backend: &B, code: &str) -> ApiResult<Membership> {
    let code = normalize_join_code(code)?;
    let joined = backend.join_family(&code).await?;
    tracing::info!("Joined family {}", joined.family_code);
    after_membership_change(backend).await
}

async fn after_membership_change<B: Backend>(backend: &B) -> ApiResult<Membership> {
    let change = refresh_user(backend).await;
    let family = match &change {
        SessionChange::SignedIn(user) if user.has_family() => Some(backend.my_family().await?),
        _ => None,
    };
    Ok(Membership { change, family })
}

/// Outcome of starting questions. Once the server confirmed the start this
/// is always returned, even if today's question then failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct Started {
    pub family: Family,
    pub today: Option<FamilyQuestion>,
    pub today_error: Option<ApiError>,
}

/// Start the daily questions. Refused locally unless `control` is enabled; on
/// success today's question is fetched immediately.
pub async fn start_questions<B: Backend>(backend: &B, control: StartControl) -> ApiResult<Started> {
    control.check()?;
    let family = backend.start_questions().await?;
    tracing::info!("Questions started for family {}", family.family_code);
    let (today, today_error) = fetch_today(backend).await;
    Ok(Started {
        family,
        today,
        today_error,
    })
}
