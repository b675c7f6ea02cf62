//! End-to-end lifecycle flows through the wired container.
//!
//! Balances are asserted on the simulated ledger itself, so these tests
//! observe the same money movement a deployment would.

use crate::integration::support::{
    create_request, headers, TestNode, CREATOR, OUTSIDER, WORKER,
};
use bb_01_identity::{AuthHeaders, CHALLENGE_PREFIX};
use bb_02_ledger::LedgerGateway;
use bb_06_lifecycle::{LifecycleError, SubmitProofRequest, TaskLifecycleApi};
use shared_types::{Amount, TaskStatus};

#[tokio::test]
async fn test_full_bounty_lifecycle() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();

    // Create: escrow funded, task visible as OPEN.
    let task = node.funded_task(10).await;
    assert_eq!(task.status, TaskStatus::Open);
    assert!(task.tx_id.as_deref().unwrap().starts_with("DEP-"));
    assert_eq!(
        node.ledger().account_balance(node.ledger().escrow_address()).await.unwrap(),
        Amount::from_units(10)
    );

    // Claim: worker bound.
    let task = lifecycle
        .claim_task(&task.id, WORKER, &headers(WORKER))
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Claimed);
    assert_eq!(task.worker_wallet.as_deref(), Some(WORKER));

    // Submit proof.
    let task = lifecycle
        .submit_proof(
            SubmitProofRequest {
                task_id: task.id.clone(),
                proof_url: "https://github.com/worker/translation".to_string(),
                ai_verify: false,
            },
            &headers(WORKER),
        )
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Submitted);

    // Approve: 3% fee withheld, payout confirmed on the ledger.
    let settled = lifecycle
        .approve_task(&task.id, &headers(CREATOR))
        .await
        .unwrap();
    assert_eq!(settled.task.status, TaskStatus::Completed);
    assert_eq!(settled.settlement.worker_payout.to_string(), "9.7");
    assert_eq!(settled.settlement.platform_fee.to_string(), "0.3");

    assert_eq!(
        node.ledger().account_balance(WORKER).await.unwrap(),
        Amount::from_micros(9_700_000)
    );
    // The fee remains in escrow.
    assert_eq!(
        node.ledger().account_balance(node.ledger().escrow_address()).await.unwrap(),
        Amount::from_micros(300_000)
    );
}

#[tokio::test]
async fn test_same_deposit_cannot_fund_two_tasks() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();

    let amount = Amount::from_units(5);
    let tx_id = node.seed_deposit(CREATOR, amount);

    let first = lifecycle
        .create_task(create_request(amount, &tx_id), &headers(CREATOR))
        .await
        .unwrap();

    let second = lifecycle
        .create_task(create_request(amount, &tx_id), &headers(CREATOR))
        .await;
    assert!(matches!(
        second,
        Err(LifecycleError::DuplicateTransaction(_))
    ));

    // The first task is untouched by the rejected attempt.
    assert_eq!(
        lifecycle.get_task(&first.id).await.unwrap().status,
        TaskStatus::Open
    );
    assert_eq!(lifecycle.list_tasks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deposit_from_wrong_sender_is_rejected() {
    let node = TestNode::new();
    let tx_id = node.seed_deposit(OUTSIDER, Amount::from_units(5));

    let result = node
        .lifecycle()
        .create_task(
            create_request(Amount::from_units(5), &tx_id),
            &headers(CREATOR),
        )
        .await;
    assert!(matches!(
        result,
        Err(LifecycleError::TransactionMismatch(_))
    ));
    assert!(node.lifecycle().list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_refunds_the_full_escrow() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();
    let task = node.funded_task(10).await;

    let refunded = lifecycle
        .cancel_task(&task.id, &headers(CREATOR))
        .await
        .unwrap();

    assert_eq!(refunded.task.status, TaskStatus::Cancelled);
    assert_eq!(refunded.refund.amount, Amount::from_units(10));
    // No fee on refunds; the creator is made whole.
    assert_eq!(
        node.ledger().account_balance(CREATOR).await.unwrap(),
        Amount::from_units(10)
    );
    assert_eq!(
        node.ledger().account_balance(node.ledger().escrow_address()).await.unwrap(),
        Amount::ZERO
    );
}

#[tokio::test]
async fn test_settlement_outage_keeps_task_and_allows_retry() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();
    let task = node.funded_task(10).await;
    lifecycle
        .claim_task(&task.id, WORKER, &headers(WORKER))
        .await
        .unwrap();
    lifecycle
        .submit_proof(
            SubmitProofRequest {
                task_id: task.id.clone(),
                proof_url: "https://example.com/proof".to_string(),
                ai_verify: false,
            },
            &headers(WORKER),
        )
        .await
        .unwrap();

    node.ledger().set_fail_submissions(true);
    let failed = lifecycle.approve_task(&task.id, &headers(CREATOR)).await;
    assert!(matches!(failed, Err(LifecycleError::SettlementFailed(_))));
    assert_eq!(
        lifecycle.get_task(&task.id).await.unwrap().status,
        TaskStatus::Submitted
    );
    assert_eq!(node.ledger().payments_submitted(), 0);

    node.ledger().set_fail_submissions(false);
    let settled = lifecycle
        .approve_task(&task.id, &headers(CREATOR))
        .await
        .unwrap();
    assert_eq!(settled.task.status, TaskStatus::Completed);
    assert_eq!(node.ledger().payments_submitted(), 1);
}

#[tokio::test]
async fn test_auto_verification_completes_repository_proof() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();
    let task = node.funded_task(10).await;
    lifecycle
        .claim_task(&task.id, WORKER, &headers(WORKER))
        .await
        .unwrap();

    let task = lifecycle
        .submit_proof(
            SubmitProofRequest {
                task_id: task.id.clone(),
                proof_url: "https://github.com/worker/translation".to_string(),
                ai_verify: true,
            },
            &headers(WORKER),
        )
        .await
        .unwrap();

    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(node.ledger().payments_submitted(), 1);
    assert_eq!(
        node.ledger().account_balance(WORKER).await.unwrap(),
        Amount::from_micros(9_700_000)
    );
}

#[tokio::test]
async fn test_disabled_scoring_degrades_without_failing_submission() {
    let mut config = TestNode::config();
    config.scoring.enabled = false;
    let node = TestNode::with_config(config);
    let lifecycle = node.lifecycle();
    let task = node.funded_task(10).await;
    lifecycle
        .claim_task(&task.id, WORKER, &headers(WORKER))
        .await
        .unwrap();

    // Inline scoring failure must not fail the submission.
    let task = lifecycle
        .submit_proof(
            SubmitProofRequest {
                task_id: task.id.clone(),
                proof_url: "https://github.com/worker/translation".to_string(),
                ai_verify: true,
            },
            &headers(WORKER),
        )
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Submitted);
    assert_eq!(node.ledger().payments_submitted(), 0);

    // The standalone scoring operation does surface the outage.
    let result = lifecycle.ai_verify_task(&task.id, &headers(CREATOR)).await;
    assert!(matches!(
        result,
        Err(LifecycleError::ExternalServiceUnavailable(_))
    ));
}

#[tokio::test]
async fn test_dispute_freezes_release() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();
    let task = node.funded_task(10).await;
    lifecycle
        .claim_task(&task.id, WORKER, &headers(WORKER))
        .await
        .unwrap();

    let task = lifecycle
        .dispute_task(&task.id, "worker unresponsive", &headers(CREATOR))
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Disputed);
    assert_eq!(task.disputed_by.as_deref(), Some(CREATOR));

    // Neither approval nor manual release can move a disputed task.
    assert!(matches!(
        lifecycle.approve_task(&task.id, &headers(CREATOR)).await,
        Err(LifecycleError::PreconditionFailed { .. })
    ));
    assert!(matches!(
        lifecycle.release_payment(&task.id, &headers(CREATOR)).await,
        Err(LifecycleError::PreconditionFailed { .. })
    ));
    assert_eq!(node.ledger().payments_submitted(), 0);
}

#[tokio::test]
async fn test_strict_identity_end_to_end() {
    use ed25519_dalek::{Signer, SigningKey};

    let mut config = TestNode::config();
    config.identity.mode = node_runtime::IdentityMode::Strict;
    let node = TestNode::with_config(config);
    let lifecycle = node.lifecycle();

    let signing_key = SigningKey::generate(&mut rand::thread_rng());
    let creator = hex::encode(signing_key.verifying_key().to_bytes());
    let message = "login:1700000000";
    let mut prefixed = CHALLENGE_PREFIX.to_vec();
    prefixed.extend_from_slice(message.as_bytes());
    let signature = hex::encode(signing_key.sign(&prefixed).to_bytes());

    let amount = Amount::from_units(3);
    let tx_id = node.seed_deposit(&creator, amount);
    let mut request = create_request(amount, &tx_id);
    request.creator_wallet = creator.clone();

    // A signed challenge authenticates.
    let task = lifecycle
        .create_task(
            request.clone(),
            &AuthHeaders::signed(creator.clone(), signature, message),
        )
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Open);

    // A bare address no longer does.
    let tx_id = node.seed_deposit(&creator, amount);
    request.tx_id = Some(tx_id);
    let result = lifecycle
        .create_task(request, &AuthHeaders::of_wallet(creator))
        .await;
    assert!(matches!(
        result,
        Err(LifecycleError::AuthorizationFailed(_))
    ));
}
