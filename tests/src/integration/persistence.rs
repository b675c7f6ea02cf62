//! Restart durability of the file-backed store.

use crate::integration::support::{create_request, headers, TestNode, CREATOR, WORKER};
use bb_06_lifecycle::{LifecycleError, TaskLifecycleApi};
use node_runtime::NodeConfig;
use shared_types::{Amount, TaskStatus, WalletRole};
use std::path::Path;

fn file_config(data_dir: &Path) -> NodeConfig {
    let mut config = TestNode::config();
    config.storage.file_backed = true;
    config.storage.data_dir = data_dir.to_path_buf();
    config
}

#[tokio::test]
async fn test_tasks_and_used_deposits_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let amount = Amount::from_units(7);
    let (task_id, tx_id);

    {
        let node = TestNode::with_config(file_config(dir.path()));
        let lifecycle = node.lifecycle();
        tx_id = node.seed_deposit(CREATOR, amount);
        let task = lifecycle
            .create_task(create_request(amount, &tx_id), &headers(CREATOR))
            .await
            .unwrap();
        lifecycle
            .claim_task(&task.id, WORKER, &headers(WORKER))
            .await
            .unwrap();
        task_id = task.id;
        // Container drops here, releasing the store lock.
    }

    let node = TestNode::with_config(file_config(dir.path()));
    let lifecycle = node.lifecycle();

    let task = lifecycle.get_task(&task_id).await.unwrap();
    assert_eq!(task.status, TaskStatus::Claimed);
    assert_eq!(task.worker_wallet.as_deref(), Some(WORKER));
    assert_eq!(task.amount, amount);

    // The consumed funding id stays consumed across the restart, even
    // though the fresh simulated ledger no longer knows the transaction.
    let reuse = lifecycle
        .create_task(create_request(amount, &tx_id), &headers(CREATOR))
        .await;
    assert!(matches!(
        reuse,
        Err(LifecycleError::DuplicateTransaction(_))
    ));
}

#[tokio::test]
async fn test_wallet_roles_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let node = TestNode::with_config(file_config(dir.path()));
        node.lifecycle()
            .set_wallet_role(CREATOR, WalletRole::Poster, &headers(CREATOR))
            .await
            .unwrap();
    }

    let node = TestNode::with_config(file_config(dir.path()));
    assert_eq!(
        node.lifecycle().get_wallet_role(CREATOR).await.unwrap(),
        Some(WalletRole::Poster)
    );
}

#[tokio::test]
async fn test_two_nodes_cannot_share_one_store() {
    let dir = tempfile::tempdir().unwrap();
    let _first = TestNode::with_config(file_config(dir.path()));

    let second = node_runtime::AppContainer::new(file_config(dir.path()));
    assert!(second.is_err());
}
