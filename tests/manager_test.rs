//! AccountManager over a real file store
//!
//! Run with: cargo test --test manager_test -- --nocapture

use account_storage::{
    AccountManager, AccountStore, AppVariant, ChainConfig, FileAccountStore, StorageConfig,
};
use alloy_primitives::address;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temp directory holding one account file, removed on drop
struct TestEnvironment {
    _temp_dir: TempDir,
    path: PathBuf,
    config: StorageConfig,
}

impl TestEnvironment {
    fn new(variant: AppVariant) -> anyhow::Result<Self> {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("wallet").join("account.json");
        log::info!("Test account file: {}", path.display());

        Ok(Self {
            config: StorageConfig::new(variant, &path),
            path,
            _temp_dir: temp_dir,
        })
    }

    fn manager(&self) -> anyhow::Result<AccountManager<FileAccountStore>> {
        let store = FileAccountStore::new(&self.config.storage_path);
        Ok(AccountManager::load(self.config.clone(), store)?)
    }
}

#[test]
fn test_fresh_install_has_no_account() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Prod)?;
    let manager = env.manager()?;

    assert!(manager.account().is_none());
    assert!(!env.path.exists());
    Ok(())
}

#[test]
fn test_created_account_survives_restart() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Dev)?;

    let created = {
        let mut manager = env.manager()?;
        manager
            .create_account(
                "alice",
                "0x3059",
                address!("ef4396d9ff8107086d215a1c9f8866c54795d7c7"),
                &ChainConfig::base_sepolia(),
            )?
            .clone()
    };
    assert_eq!(created.enclave_key_name, "wallet-enclave-key-dev");
    assert_eq!(created.home_chain_id, 84532);

    let manager = env.manager()?;
    assert_eq!(manager.account(), Some(&created));
    Ok(())
}

#[test]
fn test_mutations_are_persisted() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Prod)?;

    {
        let mut manager = env.manager()?;
        manager.create_account(
            "alice",
            "0x3059",
            address!("ef4396d9ff8107086d215a1c9f8866c54795d7c7"),
            &ChainConfig::base(),
        )?;
        assert!(manager.dismiss_action("join-tg")?);
        assert!(manager.dismiss_action("join-tg")?);
        assert!(manager.set_push_token(Some("ExponentPushToken[abc]".to_string()))?);
        assert!(manager.mark_notifications_read(1_700_000_000)?);
        assert!(manager.set_onboarded()?);
    }

    let manager = env.manager()?;
    let account = manager.account().expect("account should reload");
    assert_eq!(account.dismissed_action_ids, vec!["join-tg"]);
    assert_eq!(account.push_token.as_deref(), Some("ExponentPushToken[abc]"));
    assert_eq!(account.last_read_notif_timestamp, 1_700_000_000);
    assert!(account.is_onboarded);
    Ok(())
}

#[test]
fn test_clear_writes_empty_record() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Prod)?;

    let mut manager = env.manager()?;
    manager.create_account(
        "alice",
        "0x3059",
        address!("ef4396d9ff8107086d215a1c9f8866c54795d7c7"),
        &ChainConfig::base(),
    )?;
    manager.clear()?;

    assert!(manager.account().is_none());
    assert_eq!(fs::read_to_string(&env.path)?, "");
    assert!(env.manager()?.account().is_none());
    Ok(())
}

#[test]
fn test_legacy_file_is_migrated_on_load() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Prod)?;
    let store = FileAccountStore::new(&env.path);
    store.save_raw(include_str!("fixtures/v15_production.json"))?;

    let mut manager = env.manager()?;
    assert_eq!(manager.account().map(|a| a.name.as_str()), Some("rosalind"));

    // The file stays in its old shape until the first write
    assert!(fs::read_to_string(&env.path)?.contains(r#""storageVersion": 15"#));

    manager.set_onboarded()?;
    let raw = store.load_raw()?.unwrap_or_default();
    assert!(raw.starts_with(r#"{"storageVersion":16,"#));
    Ok(())
}

#[test]
fn test_too_old_file_loads_as_no_account() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Prod)?;
    FileAccountStore::new(&env.path).save_raw(r#"{"storageVersion":5,"name":"old"}"#)?;

    let manager = env.manager()?;
    assert!(manager.account().is_none());
    Ok(())
}

#[test]
fn test_unknown_version_file_fails_to_load() -> anyhow::Result<()> {
    let env = TestEnvironment::new(AppVariant::Prod)?;
    FileAccountStore::new(&env.path).save_raw(r#"{"storageVersion":9999}"#)?;

    let err = env.manager().err().expect("load should fail");
    assert!(err.to_string().contains("9999"));
    Ok(())
}
