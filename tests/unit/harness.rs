use crate::common::{self, GENESIS_HASH_B64, OTHER_ADDRESS, SEED_HEX, SIGNER_ADDRESS};
use algo_app_harness::errors::AppError;
use algo_app_harness::harness::{ApplicationTxnSpec, ApplicationsContext};
use algo_app_harness::types::OnCompletion;
use anyhow::Result;

/// Tests for the scenario steps, driven without the cucumber runner

const CLOSEOUT_SIGNED: &str = "gqNzaWfEQCXWffzaTTyjR1UUleaU2n1EIi62DfaD3yBnbSioxWTvfvdyHougL39MugoYxbDs7IHG0WqeAvz9JLuEuCAvNQKjdHhuiaRhcGFuAqRhcGFzkwECA6RhcGlke6NmZWXNA+iiZnbNIyiiZ2jEIF5yqcKrRjzR5NSIFXTiuaGZDS5Dj4Ab3k2/GjFgF8i/omx2zSMyo3NuZMQgA6EHv/POEL4dcN0Y50vAmWfk1jCbpQ1fHdyGZBJVMbikdHlwZaRhcHBs";
const CREATE_PAGES_SIGNED: &str = "gqNzaWfEQC07goN3oxDG1/uzcupdGvcyG7Cq5l9sWyRP5JKUmQ05jDbO+uMDHB4lJi2fsJQUeQsq2iERnwJWOtIroLhifQ6jdHhui6RhcGFwxAUCIAEBIqRhcGVwAqRhcGdzgaNuYnMBpGFwbHOBo251aQGkYXBzdcQFAiABACKjZmVlzQPoomZ2zSMoomdoxCBecqnCq0Y80eTUiBV04rmhmQ0uQ4+AG95NvxoxYBfIv6Jsds0jMqNzbmTEIAOhB7/zzhC+HXDdGOdLwJln5NYwm6UNXx3chmQSVTG4pHR5cGWkYXBwbA==";

fn context() -> Result<ApplicationsContext> {
    let mut ctx = ApplicationsContext::new(common::resources_dir());
    let address = ctx.use_account_seed_hex(SEED_HEX)?;
    assert_eq!(address.to_string(), SIGNER_ADDRESS);
    Ok(ctx)
}

fn spec(operation: &str, application_id: u64) -> ApplicationTxnSpec {
    ApplicationTxnSpec {
        operation: operation.to_string(),
        application_id,
        sender: SIGNER_ADDRESS.to_string(),
        fee: 1000,
        first_valid: 9000,
        last_valid: 9010,
        genesis_hash: GENESIS_HASH_B64.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_closeout_matches_golden() -> Result<()> {
    let mut ctx = context()?;
    let mut closeout = spec("closeout", 123);
    closeout.foreign_assets = "1,2,3".to_string();

    ctx.build_application_transaction(&closeout)?;
    ctx.sign_transaction()?;
    ctx.the_base64_encoded_signed_transaction_should_equal(CLOSEOUT_SIGNED)?;
    ctx.fee_field_is_in_txn()?;
    Ok(())
}

#[test]
fn test_create_with_extra_pages_matches_golden() -> Result<()> {
    let mut ctx = context()?;
    let mut create = spec("create", 0);
    create.approval_program = "programs/one.teal".to_string();
    create.clear_program = "programs/zero.teal".to_string();
    create.global_bytes = 1;
    create.local_ints = 1;
    create.extra_pages = 2;

    ctx.build_application_transaction(&create)?;
    let tx = ctx.tx.as_ref().expect("transaction built");
    assert_eq!(tx.application.extra_program_pages, 2);

    ctx.sign_transaction()?;
    ctx.the_base64_encoded_signed_transaction_should_equal(CREATE_PAGES_SIGNED)?;
    Ok(())
}

#[test]
fn test_golden_mismatch_is_an_assertion() -> Result<()> {
    let mut ctx = context()?;
    ctx.build_application_transaction(&spec("clear", 123))?;
    ctx.sign_transaction()?;

    let err = ctx
        .the_base64_encoded_signed_transaction_should_equal(CLOSEOUT_SIGNED)
        .unwrap_err();
    assert!(matches!(err, AppError::Assertion(_)));
    Ok(())
}

#[test]
fn test_zero_fee_is_omitted() -> Result<()> {
    let mut ctx = context()?;
    let mut free = spec("call", 9);
    free.fee = 0;
    free.app_accounts = OTHER_ADDRESS.to_string();

    ctx.build_application_transaction(&free)?;
    ctx.sign_transaction()?;
    ctx.fee_field_not_in_txn()?;
    assert!(ctx.fee_field_is_in_txn().is_err());
    Ok(())
}

#[test]
fn test_invalid_inputs_are_rejected() -> Result<()> {
    let mut ctx = context()?;

    let mut bad_arg = spec("call", 1);
    bad_arg.app_args = "float:1.5".to_string();
    let err = ctx.build_application_transaction(&bad_arg).unwrap_err();
    assert!(err
        .to_string()
        .contains("Applications doesn't currently support argument of type float"));

    let mut missing_program = spec("update", 1);
    missing_program.approval_program = "programs/missing.teal".to_string();
    assert!(matches!(
        ctx.build_application_transaction(&missing_program),
        Err(AppError::Io(_))
    ));

    let mut too_many_pages = spec("create", 0);
    too_many_pages.extra_pages = 4;
    assert!(ctx.build_application_transaction(&too_many_pages).is_err());

    let mut bad_gh = spec("optin", 1);
    bad_gh.genesis_hash = "AAEC".to_string();
    assert!(ctx.build_application_transaction(&bad_gh).is_err());
    Ok(())
}

#[test]
fn test_every_operation_sets_on_completion() -> Result<()> {
    let mut ctx = context()?;
    let cases = [
        ("call", OnCompletion::NoOp),
        ("optin", OnCompletion::OptIn),
        ("closeout", OnCompletion::CloseOut),
        ("clear", OnCompletion::ClearState),
        ("update", OnCompletion::UpdateApplication),
        ("delete", OnCompletion::DeleteApplication),
    ];
    for (operation, expected) in cases {
        ctx.build_application_transaction(&spec(operation, 5))?;
        let tx = ctx.tx.as_ref().expect("transaction built");
        assert_eq!(tx.application.on_completion, expected, "{}", operation);
        assert_eq!(tx.application.application_id, 5);
    }
    Ok(())
}

#[tokio::test]
async fn test_client_steps_hit_expected_paths() -> Result<()> {
    let server = common::start_mock_node().await;
    let mut ctx = context()?;
    ctx.mock_url = Some(server.uri());

    ctx.we_make_a_get_asset_by_id_call(100).await?;
    ctx.we_make_a_get_application_by_id_call(123).await?;
    ctx.we_make_a_search_for_applications_call(7).await?;
    ctx.we_make_a_lookup_applications_call(123).await?;

    assert_eq!(
        common::received_paths(&server).await,
        vec![
            "/v2/assets/100",
            "/v2/applications/123",
            "/v2/applications?application-id=7",
            "/v2/applications/123",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_client_step_failures_are_swallowed() -> Result<()> {
    // Nothing mounted: every call gets a 404 back
    let server = wiremock::MockServer::start().await;
    let mut ctx = context()?;
    ctx.mock_url = Some(server.uri());

    ctx.we_make_a_get_asset_by_id_call(1).await?;
    ctx.we_make_a_lookup_applications_call(1).await?;
    Ok(())
}
