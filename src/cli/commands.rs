use crate::cli::Commands;
use crate::github::{
    options::{CommitListOptions, EventListOptions, RepoListOptions, SearchOptions},
    GitHubClient,
};
use crate::showcase::{self, PortfolioSnapshot, ProjectFilter};
use crate::Result;
use serde::Serialize;
use tracing::{info, warn};

/// Run one command against the catalog and print its result
pub async fn run(client: &GitHubClient, user: Option<&str>, command: Commands) -> Result<()> {
    match command {
        Commands::RateLimit => print_json(&client.check_rate_limit().await?),
        Commands::Profile => print_json(&client.get_user(user).await?),
        Commands::Repos {
            repo_type,
            sort,
            direction,
            per_page,
            page,
        } => {
            let options = RepoListOptions {
                repo_type,
                sort,
                direction,
                per_page,
                page,
            };
            print_json(&client.get_user_repos(user, &options).await?)
        }
        Commands::Repo { repo } => {
            print_json(&client.get_repository(&repo.owner, &repo.name).await?)
        }
        Commands::Languages { repo } => {
            print_json(&client.get_repository_languages(&repo.owner, &repo.name).await?)
        }
        Commands::Commits {
            repo,
            per_page,
            page,
            branch,
        } => {
            let options = CommitListOptions {
                per_page,
                page,
                branch,
            };
            print_json(
                &client
                    .get_repository_commits(&repo.owner, &repo.name, &options)
                    .await?,
            )
        }
        Commands::Readme { repo } => {
            let readme = client.get_repository_readme(&repo.owner, &repo.name).await?;
            println!("{readme}");
            Ok(())
        }
        Commands::Gists => print_json(&client.get_user_gists(user).await?),
        Commands::Events { per_page, page } => {
            let options = EventListOptions { per_page, page };
            print_json(&client.get_user_events(user, &options).await?)
        }
        Commands::Search {
            query,
            sort,
            order,
            per_page,
            page,
        } => {
            let options = SearchOptions {
                sort,
                order,
                per_page,
                page,
            };
            let results = client.search_repositories(&query, &options).await?;
            info!(
                "Search matched {} repositories ({} on this page)",
                results.total_count,
                results.items.len()
            );
            print_json(&results)
        }
        Commands::Pinned => print_json(&client.get_pinned_repositories(user).await?),
        Commands::Contributions { year } => {
            print_json(&client.get_contributions(user, year).await?)
        }
        Commands::Projects {
            language,
            query,
            sort,
            exclude,
        } => {
            let repos = client
                .get_user_repos(user, &RepoListOptions::default())
                .await?;
            let featured = showcase::featured_projects(repos, &exclude);
            info!(
                "{} featured projects across languages: {}",
                featured.len(),
                showcase::languages(&featured).join(", ")
            );

            let filter = ProjectFilter {
                language,
                query,
                sort,
            };
            print_json(&filter.apply(&featured))
        }
        Commands::Snapshot => {
            let snapshot = PortfolioSnapshot::gather(client, user).await;
            if !snapshot.is_complete() {
                warn!(
                    "Snapshot for {} is partial ({} of 3 sections)",
                    snapshot.profile_headline(),
                    snapshot.loaded_sections()
                );
            }
            print_json(&snapshot)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
