//! Race properties over the wired container.
//!
//! These run real tokio tasks against the shared service; the assertions
//! hold for every interleaving, not just the one the scheduler picks.

use crate::integration::support::{create_request, headers, TestNode, CREATOR, OUTSIDER, WORKER};
use bb_06_lifecycle::{LifecycleError, SubmitProofRequest, TaskLifecycleApi};
use shared_types::{Amount, TaskStatus};
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_approvals_pay_exactly_once() {
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

    let mut handles = Vec::new();
    for _ in 0..4 {
        let lifecycle = Arc::clone(&lifecycle);
        let id = task.id.clone();
        handles.push(tokio::spawn(async move {
            lifecycle.approve_task(&id, &headers(CREATOR)).await
        }));
    }

    let mut successes = 0;
    let mut preconditions = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(settled) => {
                successes += 1;
                assert_eq!(settled.task.status, TaskStatus::Completed);
            }
            Err(LifecycleError::PreconditionFailed { current, .. }) => {
                preconditions += 1;
                assert_eq!(current, TaskStatus::Completed);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(preconditions, 3);
    // The ledger saw exactly one release for the task.
    assert_eq!(node.ledger().payments_submitted(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_claims_bind_one_worker() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();
    let task = node.funded_task(5).await;

    let workers = [WORKER, OUTSIDER, "THIRD_WALLET_01", "FOURTH_WALLET_01"];
    let mut handles = Vec::new();
    for worker in workers {
        let lifecycle = Arc::clone(&lifecycle);
        let id = task.id.clone();
        handles.push(tokio::spawn(async move {
            lifecycle
                .claim_task(&id, worker, &headers(worker))
                .await
                .map(|t| t.worker_wallet)
        }));
    }

    let mut winning_wallets = Vec::new();
    for handle in handles {
        if let Ok(wallet) = handle.await.unwrap() {
            winning_wallets.push(wallet);
        }
    }
    assert_eq!(winning_wallets.len(), 1);

    // The stored worker is exactly the winner, never a blend.
    let stored = lifecycle.get_task(&task.id).await.unwrap();
    assert_eq!(stored.status, TaskStatus::Claimed);
    assert_eq!(stored.worker_wallet, winning_wallets[0]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_consume_deposit_once() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();
    let amount = Amount::from_units(5);
    let tx_id = node.seed_deposit(CREATOR, amount);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let lifecycle = Arc::clone(&lifecycle);
        let tx_id = tx_id.clone();
        handles.push(tokio::spawn(async move {
            lifecycle
                .create_task(create_request(amount, &tx_id), &headers(CREATOR))
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(LifecycleError::DuplicateTransaction(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(lifecycle.list_tasks().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_operations_on_distinct_tasks_proceed_independently() {
    let node = TestNode::new();
    let lifecycle = node.lifecycle();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(node.funded_task(2).await.id);
    }

    let mut handles = Vec::new();
    for id in ids {
        let lifecycle = Arc::clone(&lifecycle);
        handles.push(tokio::spawn(async move {
            lifecycle.claim_task(&id, WORKER, &headers(WORKER)).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert!(lifecycle
        .list_tasks()
        .await
        .unwrap()
        .iter()
        .all(|t| t.status == TaskStatus::Claimed));
}
