//! Explanations of what commands do, and the local address walkthrough.

use clap::ValueEnum;
use colored::Colorize;

/// Command explanation builder.
pub struct Explain {
    description: String,
    requests: Vec<String>,
    what_happens: Vec<String>,
    learn_more: Option<String>,
}

impl Explain {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            requests: Vec::new(),
            what_happens: Vec::new(),
            learn_more: None,
        }
    }

    fn request(mut self, request: &str) -> Self {
        self.requests.push(request.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn learn_more(mut self, url: &str) -> Self {
        self.learn_more = Some(url.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        for request in &self.requests {
            println!("{} {}", "Request:".bold(), request.dimmed());
        }

        if let Some(url) = &self.learn_more {
            println!();
            println!("{} {}", "Learn more:".bold(), url.cyan().underline());
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn lookup(address: &str) -> Self {
        Self::new(&format!(
            "Finds where {address} is and which network it belongs to."
        ))
        .step("Checks that the input is an IPv4 or IPv6 address (nothing is sent otherwise)")
        .step("Asks ip-api.com for location, timezone, ISP, organization and AS")
        .step("If that fails, asks ipapi.co once instead")
        .step("Both answers are converted into the same record")
        .request(&format!("GET <primary>/{address}?fields=status,message,country,..."))
        .request(&format!("GET <fallback>/{address}/json/  (only if the first fails)"))
        .learn_more("https://ip-api.com/docs/api:json")
    }

    pub fn myip(locate: bool, echo_url: &str) -> Self {
        let explain = Self::new("Shows your public IP address as seen from the internet.")
            .step("Asks an echo service which address your request came from")
            .request(&format!("GET {echo_url}"));

        if locate {
            explain
                .step("Looks that address up like `iptrack lookup` does")
                .request("GET <primary>/<your ip>?fields=...")
        } else {
            explain
        }
    }

    pub fn classify() -> Self {
        Self::new("Tells whether each input is an IPv4 address, an IPv6 address, or neither.")
            .step("IPv4: four dot-separated numbers from 0 to 255")
            .step("IPv6: colon-separated hex groups, `::` shorthand, IPv4-mapped tails")
            .step("A `%zone` suffix is only accepted on fe80:: link-local addresses")
            .step("Runs offline: no requests are made")
    }
}

/// Operating systems covered by the local address guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Os {
    /// Windows (Command Prompt)
    Windows,
    /// macOS (Terminal)
    Mac,
}

struct GuideStep {
    title: &'static str,
    description: &'static str,
    command: Option<&'static str>,
}

const WINDOWS_STEPS: &[GuideStep] = &[
    GuideStep {
        title: "Open Command Prompt",
        description: "Press Windows + R, type \"cmd\" and press Enter",
        command: None,
    },
    GuideStep {
        title: "Run IP Configuration Command",
        description: "Type the following command and press Enter:",
        command: Some("ipconfig"),
    },
    GuideStep {
        title: "Find Your IP Address",
        description: "Look for \"IPv4 Address\" under your active network adapter (usually Ethernet or Wi-Fi)",
        command: None,
    },
    GuideStep {
        title: "For More Details (Optional)",
        description: "For detailed information including IPv6, use:",
        command: Some("ipconfig /all"),
    },
];

const MAC_STEPS: &[GuideStep] = &[
    GuideStep {
        title: "Open Terminal",
        description: "Press Cmd + Space, type \"Terminal\" and press Enter",
        command: None,
    },
    GuideStep {
        title: "Run Network Configuration Command",
        description: "Type the following command and press Enter:",
        command: Some("ifconfig"),
    },
    GuideStep {
        title: "Find Your IP Address",
        description: "Look for \"inet\" under en0 (Wi-Fi) or en1 (Ethernet) for IPv4, and \"inet6\" for IPv6",
        command: None,
    },
    GuideStep {
        title: "Alternative Method",
        description: "You can also use this simpler command:",
        command: Some("curl ifconfig.me"),
    },
];

/// Print the local address walkthrough for one or all operating systems.
pub fn print_local_ip_guide(os: Option<Os>) {
    println!("{}", "Track IP Address Locally".bold());
    println!(
        "Learn how to find your local IP address using command line tools on your operating system."
    );

    let sections: &[(Os, &str, &[GuideStep])] = &[
        (Os::Windows, "Windows Instructions", WINDOWS_STEPS),
        (Os::Mac, "macOS Instructions", MAC_STEPS),
    ];

    for (section_os, heading, steps) in sections {
        if os.is_some_and(|wanted| wanted != *section_os) {
            continue;
        }

        println!();
        println!("{}", heading.bold().cyan());
        for (i, step) in steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step.title.bold());
            println!("     {}", step.description);
            if let Some(command) = step.command {
                println!("     {}", command.green());
            }
        }
    }
}
