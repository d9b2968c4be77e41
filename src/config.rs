use clap::ValueEnum;

/// How `inspect_and_approve` treats a request that already left `Requested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TransitionPolicy {
    /// Overwrite the status whatever it was before.
    #[default]
    Permissive,
    /// Only `Requested` may move; terminal states are final.
    Strict,
}

/// How `process_refund` treats a channel name that is neither card nor wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ChannelPolicy {
    /// Fall back to the wallet channel.
    #[default]
    Lenient,
    /// Reject the refund with `UnknownChannel`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub transitions: TransitionPolicy,
    pub channels: ChannelPolicy,
    /// Masked card token credited by card refunds.
    pub card_token: String,
    /// Wallet credited by wallet refunds.
    pub wallet_id: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            transitions: TransitionPolicy::default(),
            channels: ChannelPolicy::default(),
            card_token: "XXXX-1234".to_string(),
            wallet_id: "Wallet001".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn strict() -> Self {
        Self {
            transitions: TransitionPolicy::Strict,
            channels: ChannelPolicy::Strict,
            ..Self::default()
        }
    }
}
