use crate::context::AppContext;
use crate::domain::commit::CommitRef;
use crate::error::AppResult;
use crate::workflow::checkin::{CheckinOutcome, prepare_checkin};

#[derive(Debug, Clone)]
pub struct CheckinCommandArgs {
    pub commit: CommitRef,
}

pub async fn run(ctx: &AppContext, args: CheckinCommandArgs) -> AppResult<CheckinOutcome> {
    prepare_checkin(ctx, &args.commit).await
}
