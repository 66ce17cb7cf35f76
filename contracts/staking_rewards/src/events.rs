use soroban_sdk::{Address, Env, Symbol};

pub struct StakingRewardsEvents {}

impl StakingRewardsEvents {
    /// - topics - `["staked", account: Address]`
    /// - data - `amount: i128`
    pub fn staked(env: &Env, account: Address, amount: i128) {
        let topics = (Symbol::new(env, "staked"), account);
        env.events().publish(topics, amount);
    }

    /// - topics - `["withdrawn", account: Address]`
    /// - data - `amount: i128`
    pub fn withdrawn(env: &Env, account: Address, amount: i128) {
        let topics = (Symbol::new(env, "withdrawn"), account);
        env.events().publish(topics, amount);
    }

    /// Emitted when accrued rewards are transferred out. Not emitted for empty claims.
    ///
    /// - topics - `["reward_paid", account: Address]`
    /// - data - `amount: i128`
    pub fn reward_paid(env: &Env, account: Address, amount: i128) {
        let topics = (Symbol::new(env, "reward_paid"), account);
        env.events().publish(topics, amount);
    }

    /// Emitted when the admin funds a new distribution period
    ///
    /// - topics - `["reward_added"]`
    /// - data - `[amount: i128, reward_rate: i128, period_finish: u64]`
    pub fn reward_added(env: &Env, amount: i128, reward_rate: i128, period_finish: u64) {
        let topics = (Symbol::new(env, "reward_added"),);
        env.events()
            .publish(topics, (amount, reward_rate, period_finish));
    }

    /// - topics - `["rewards_duration"]`
    /// - data - `duration: u64`
    pub fn rewards_duration_updated(env: &Env, duration: u64) {
        let topics = (Symbol::new(env, "rewards_duration"),);
        env.events().publish(topics, duration);
    }
}
