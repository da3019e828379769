use actix_web::{
    web::{Data, Path},
    HttpResponse,
};

use crate::{controller::AccountController, errors::AccountsError};

pub async fn account_list(
    controller: Data<AccountController>,
) -> Result<HttpResponse, AccountsError> {
    let view = controller.account_list();
    Ok(HttpResponse::Ok().json(view.model))
}

pub async fn account_details(
    id: Path<i64>,
    controller: Data<AccountController>,
) -> Result<HttpResponse, AccountsError> {
    let view = controller.account_details(id.into_inner())?;
    Ok(HttpResponse::Ok().json(view.model))
}

pub async fn beneficiary(
    path: Path<(i64, String)>,
    controller: Data<AccountController>,
) -> Result<HttpResponse, AccountsError> {
    let (account_id, name) = path.into_inner();
    let beneficiary = controller.beneficiary(account_id, &name)?;
    Ok(HttpResponse::Ok().json(beneficiary))
}
