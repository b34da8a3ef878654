//! Role guards.
//!
//! Hooped after the auth middleware; a missing principal is a 401, a
//! principal whose role lacks the capability is a 403.

use salvo::prelude::*;

use wave::accounts::Role;

use crate::extensions::*;

async fn require(
    allowed: fn(Role) -> bool,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match depot.principal_or_401() {
        Ok(principal) if allowed(principal.role) => {
            ctrl.call_next(req, depot, res).await;
        }
        Ok(principal) => {
            res.render(
                StatusError::forbidden()
                    .brief(format!("Not available to {} accounts", principal.role)),
            );
        }
        Err(error) => res.render(error),
    }
}

/// Vendors and admins.
#[salvo::handler]
pub(crate) async fn inventory_managers(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    require(Role::can_manage_inventory, req, depot, res, ctrl).await;
}

/// Admins only.
#[salvo::handler]
pub(crate) async fn reviewers(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    require(Role::can_review, req, depot, res, ctrl).await;
}
