#![cfg(test)]
extern crate std;

use flash_loan_interface::types::error::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env};

use crate::storage::STORAGE_VERSION;
use crate::tests::sut::init_pool;

#[test]
fn should_report_versions() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(sut.pool.version(), 1);
    assert_eq!(sut.pool.storage_version(), STORAGE_VERSION);
    assert_eq!(sut.pool.implementation(), None);
}

#[test]
fn should_fail_when_caller_is_not_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool
            .try_upgrade(&Address::generate(&env), &BytesN::from_array(&env, &[1u8; 32])),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(sut.pool.implementation(), None);
}

#[cfg(feature = "wasm-tests")]
mod upgrade_to_v2 {
    extern crate std;

    use flash_loan_interface::types::fee_schedule::FeeSchedule;
    use soroban_sdk::testutils::{AuthorizedFunction, AuthorizedInvocation, Events};
    use soroban_sdk::{symbol_short, vec, Bytes, Env, IntoVal, Symbol};

    use crate::tests::sut::{fill_pool, init_pool, FEE_RATE, POOL_LIQUIDITY};

    mod flash_loan_v2 {
        soroban_sdk::contractimport!(
            file = "../../target/wasm32-unknown-unknown/release/flash_loan_v2_mock.wasm"
        );
    }

    #[test]
    fn should_require_admin() {
        let env = Env::default();
        env.mock_all_auths();

        let sut = init_pool(&env);
        let v2_wasm = env.deployer().upload_contract_wasm(flash_loan_v2::WASM);

        sut.pool.upgrade(&sut.governance, &v2_wasm);

        assert_eq!(
            env.auths(),
            [(
                sut.governance.clone(),
                AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        sut.pool.address.clone(),
                        Symbol::new(&env, "upgrade"),
                        vec![
                            &env,
                            sut.governance.into_val(&env),
                            v2_wasm.into_val(&env)
                        ]
                    )),
                    sub_invocations: std::vec![]
                }
            )]
        );
    }

    #[test]
    fn should_keep_state_after_upgrade() {
        let env = Env::default();
        env.mock_all_auths();

        let sut = init_pool(&env);
        fill_pool(&env, &sut);

        sut.pool.issue(
            &sut.asset(),
            &1_000_000,
            &sut.borrower.address,
            &Bytes::new(&env),
        );

        let v2_wasm = env.deployer().upload_contract_wasm(flash_loan_v2::WASM);
        let storage_version_before = sut.pool.storage_version();
        assert_eq!(sut.pool.version(), 1);

        sut.pool.upgrade(&sut.governance, &v2_wasm);

        let event = env.events().all().pop_back_unchecked();
        assert_eq!(
            vec![&env, event],
            vec![
                &env,
                (
                    sut.pool.address.clone(),
                    (symbol_short!("upgrade"),).into_val(&env),
                    v2_wasm.into_val(&env)
                ),
            ]
        );

        let pool_v2 = flash_loan_v2::Client::new(&env, &sut.pool.address);

        assert_eq!(sut.pool.version(), 2);
        assert_eq!(pool_v2.version(), 2);
        assert_eq!(pool_v2.implementation(), Some(v2_wasm));
        assert_eq!(pool_v2.storage_version(), storage_version_before);
        assert_eq!(pool_v2.admin(), sut.governance);
        assert_eq!(pool_v2.balance(&sut.asset()), POOL_LIQUIDITY + 450);
        assert_eq!(pool_v2.accrued_fees(&sut.asset()), 450);
        assert_eq!(sut.token.balance(&sut.pool.address), POOL_LIQUIDITY + 450);
        assert_eq!(
            sut.pool.fee_schedule(),
            FeeSchedule::flat(&env, FEE_RATE)
        );
    }
}
