use clap::Subcommand;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (chat page, /chat relay, /health)
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Bind to 127.0.0.1 instead of --host, keeping the server off the network
        #[arg(long)]
        local: bool,
    },

    /// Relay a single message and print the reply
    Ask { message: String },
}
