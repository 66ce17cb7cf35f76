use kooja::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::{ErrorCode, KoojaResult},
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, BytesN, Env, I256,
};

use crate::{
    controller,
    events::StakingRewardsEvents,
    math::rewards::{earned, last_time_reward_applicable, reward_per_token},
    staking_rewards::StakingRewardsTrait,
    storage::{
        get_config, get_reward_state, get_staker, save_config, save_reward_state,
        utils::{get_admin, is_initialized, save_admin, set_initialized},
        Config, RewardState, StakerInfo,
    },
};

contractmeta!(
    key = "Description",
    val = "Distributes a funded reward token to stakers of a pool share token"
);

#[contract]
pub struct StakingRewards;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn check_admin(env: &Env, sender: &Address) -> KoojaResult {
    validate!(
        env,
        *sender == get_admin(env),
        ErrorCode::NotAuthorized,
        "Staking Rewards: sender is not the admin"
    )
}

#[contractimpl]
impl StakingRewardsTrait for StakingRewards {
    fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        reward_token: Address,
        duration: u64,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking Rewards: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        save_admin(&env, &admin);
        save_config(
            &env,
            &Config {
                staking_token,
                reward_token,
                duration,
            },
        );
        save_reward_state(&env, &RewardState::new(&env));
    }

    fn deposit_reward_tokens(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender)?;

        controller::rewards::deposit_reward_tokens(&env, &sender, amount)
    }

    fn set_rewards_duration(env: Env, sender: Address, duration: u64) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);
        check_admin(&env, &sender)?;

        validate!(&env, duration > 0, ErrorCode::ZeroDuration)?;
        let period_finish = get_reward_state(&env).period_finish;
        let now = env.ledger().timestamp();
        validate!(
            &env,
            now >= period_finish,
            ErrorCode::RewardPeriodActive,
            "current period runs until {}",
            period_finish
        )?;

        let mut config = get_config(&env);
        config.duration = duration;
        save_config(&env, &config);

        StakingRewardsEvents::rewards_duration_updated(&env, duration);

        Ok(())
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_admin(&env);
        admin.require_auth();
        bump_instance(&env);

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::stake::stake(&env, &sender, amount)
    }

    fn withdraw(env: Env, sender: Address, amount: i128) -> Result<(), ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::stake::withdraw(&env, &sender, amount)
    }

    fn get_reward(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::stake::get_reward(&env, &sender)
    }

    fn exit(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::stake::exit(&env, &sender)
    }

    fn emergency_withdraw(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::stake::emergency_withdraw(&env, &sender)
    }

    fn last_time_reward_applicable(env: Env) -> u64 {
        last_time_reward_applicable(
            env.ledger().timestamp(),
            get_reward_state(&env).period_finish,
        )
    }

    fn reward_per_token(env: Env) -> Result<I256, ErrorCode> {
        reward_per_token(&env, &get_reward_state(&env), env.ledger().timestamp())
    }

    fn earned(env: Env, account: Address) -> Result<i128, ErrorCode> {
        let reward_per_token =
            reward_per_token(&env, &get_reward_state(&env), env.ledger().timestamp())?;
        earned(&env, &get_staker(&env, &account), &reward_per_token)
    }

    fn get_reward_for_duration(env: Env) -> Result<i128, ErrorCode> {
        let duration = get_config(&env).duration as i128;
        get_reward_state(&env).reward_rate.safe_mul(duration, &env)
    }

    fn total_staked(env: Env) -> i128 {
        get_reward_state(&env).total_staked
    }

    fn query_staked(env: Env, account: Address) -> StakerInfo {
        get_staker(&env, &account)
    }

    fn query_reward_state(env: Env) -> RewardState {
        get_reward_state(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn staking_token(env: Env) -> Address {
        get_config(&env).staking_token
    }

    fn rewards_token(env: Env) -> Address {
        get_config(&env).reward_token
    }

    fn query_admin(env: Env) -> Address {
        get_admin(&env)
    }
}
