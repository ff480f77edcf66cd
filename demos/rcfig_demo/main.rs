//! # rcfig demo application
//!
//! A sample CLI tool that showcases how to integrate
//! [rcfig](https://docs.rs/rcfig) into a real application. This is **not** a
//! real app — it exists purely to demonstrate and manually verify rcfig's
//! features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example rcfig_demo
//! cargo run --example rcfig_demo -- --days 7
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                | How to exercise it                                          |
//! |------------------------|-------------------------------------------------------------|
//! | Compiled defaults      | `cargo run --example rcfig_demo`                            |
//! | File persistence       | run once, then inspect `~/.rcfig-demorc`                    |
//! | File override          | edit `days=...` in the rc file, run again                   |
//! | Path override          | `RCFIGDEMORC=/tmp/demo-rc cargo run --example rcfig_demo`   |
//! | CLI override           | `cargo run --example rcfig_demo -- --days 7` (not persisted)|
//! | Shorthand alias        | `cargo run --example rcfig_demo -- -d 7`                    |
//! | Bool flag              | `cargo run --example rcfig_demo -- --imperial`              |
//! | Obsolete preservation  | add `old-key=1` to the rc file, run with `RUST_LOG=warn`    |

use std::time::Duration;

use rcfig::{OptionRegistry, Rcfig, RcfigError};

fn main() -> Result<(), RcfigError> {
    env_logger::init();

    let mut options = OptionRegistry::new();
    options.string("city", "Berlin", "city to query");
    options.int("days", 3, "number of forecast days");
    options.alias("days", "d");
    options.bool("imperial", false, "use imperial units");
    options.duration("cache-ttl", Duration::from_secs(600), "cached response lifetime");
    options.list("langs", &["en"], "preferred result languages");

    let report = Rcfig::builder()
        .app_name("rcfig-demo")
        .args(std::env::args())
        .sync(&mut options)?;

    println!("config file : {}", report.path.display());
    println!(
        "sync result : {}",
        if report.rewritten { "rewritten" } else { "unchanged" }
    );
    if !report.obsolete.is_empty() {
        println!("obsolete    : {} entries preserved", report.obsolete.len());
    }
    println!();

    for opt in options.iter() {
        println!("{:>10} = {}", opt.canonical_name(), opt.current_value());
    }

    Ok(())
}
