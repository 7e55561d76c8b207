//! genesis mind command

use clap::{Args, Subcommand};
use console::style;
use genesis_adapter::InMemoryMindRepository;
use genesis_domain::model::mind::{JobId, Mind, MindId};
use genesis_domain::repository::mind_repository::MindRepository;
use genesis_domain::service::mind_filter::{BlacklistedJobsMindFilter, MindFilter};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct MindCommand {
    #[command(subcommand)]
    pub command: MindSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum MindSubcommand {
    /// Check whether a mind with the given jobs passes a job filter
    Check {
        /// Jobs the mind holds (comma-separated)
        #[arg(long, value_delimiter = ',')]
        jobs: Vec<String>,
        /// Jobs the filter lists (comma-separated)
        #[arg(long, value_delimiter = ',')]
        blacklist: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Outcome of `genesis mind check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MindCheck {
    pub jobs: Vec<String>,
    pub blacklist: Vec<String>,
    pub should_remove: bool,
    pub is_allowed: bool,
}

impl MindCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            MindSubcommand::Check {
                jobs,
                blacklist,
                json,
            } => {
                let check = check(jobs, blacklist)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&check)?);
                } else if check.is_allowed {
                    println!("{} mind holds a listed job", style("kept").green());
                } else {
                    println!("{} mind holds none of the listed jobs", style("removed").red());
                }
            }
        }
        Ok(())
    }
}

/// Evaluate the filter for an ad-hoc mind
pub fn check(jobs: &[String], blacklist: &[String]) -> anyhow::Result<MindCheck> {
    let id = MindId::new("cli");
    let mind = jobs
        .iter()
        .fold(Mind::new(id.clone(), "cli"), |mind, job| mind.with_job(job.as_str()));

    let mut minds = InMemoryMindRepository::new();
    minds.save(&mind)?;

    let filter = BlacklistedJobsMindFilter::new(blacklist.iter().map(|j| JobId::new(j.as_str())));
    let should_remove = filter.should_remove(&id, &minds);

    Ok(MindCheck {
        jobs: jobs.to_vec(),
        blacklist: blacklist.to_vec(),
        should_remove,
        is_allowed: filter.is_allowed(&id, &minds),
    })
}
