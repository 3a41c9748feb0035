use std::env;
use std::process;

use tbpan::{Config, Session};
use tracing_subscriber::{EnvFilter, fmt};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    #[allow(dead_code)]
    pub fn take_flag(&mut self, names: &[&str]) -> bool {
        match self.args.iter().position(|a| names.contains(&a.as_str())) {
            Some(i) => {
                self.args.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remaining positionals, exiting with usage unless there are exactly `n`.
    #[allow(dead_code)]
    pub fn positionals(self, n: usize) -> Vec<String> {
        if self.args.len() != n {
            usage_and_exit(self.usage);
        }
        self.args
    }

    #[allow(dead_code)]
    pub fn positionals_up_to(self, n: usize) -> Vec<String> {
        if self.args.len() > n {
            usage_and_exit(self.usage);
        }
        self.args
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tbpan=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// Connect with credentials from the environment, honouring `--proxy`.
pub async fn connect(parser: &mut ArgParser) -> Session {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            eprintln!("Set TEAMBITION_SESSIONID and TEAMBITION_SESSIONID_SIG from your browser cookies.");
            process::exit(1);
        }
    };
    if let Some(proxy) = parser.take_value(&["--proxy"]) {
        config = config.with_proxy(proxy);
    }

    match Session::connect(config).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("❌ Failed to connect: {e}");
            process::exit(1);
        }
    }
}

#[allow(dead_code)]
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
