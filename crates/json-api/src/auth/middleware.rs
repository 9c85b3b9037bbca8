//! Access gate middleware.

use std::sync::Arc;

use salvo::{http::Method, prelude::*};
use tracing::debug;

use crate::{errors::ApiError, extensions::*, state::State};

/// Header carrying the shared API secret.
pub(crate) const AUTH_TOKEN_HEADER: &str = "x-auth-token";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if *req.method() == Method::OPTIONS {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let Some(token) = extract_token(req) else {
        debug!("rejected request without auth token");
        reject(res, ctrl, ApiError::unauthorized());

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            reject(res, ctrl, error);

            return;
        }
    };

    if state.auth.authenticate(&token).await.is_err() {
        debug!("rejected request with invalid auth token");
        reject(res, ctrl, ApiError::unauthorized());

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_token(req: &Request) -> Option<String> {
    req.headers()
        .get(AUTH_TOKEN_HEADER)?
        .to_str()
        .ok()
        .map(str::to_owned)
}

fn reject(res: &mut Response, ctrl: &mut FlowCtrl, error: ApiError) {
    res.render(error);
    ctrl.skip_rest();
}
