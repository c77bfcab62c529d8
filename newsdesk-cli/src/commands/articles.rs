//! Client commands - list a page of articles, delete one
//!
//! ```bash
//! newsdesk list --page 2 --limit 20
//! newsdesk delete 42 --json | jq '.[].headline'
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;

use newsdesk_client::{DeleteResolution, FeedView, HttpArticleApi, ViewState};
use newsdesk_core::{Article, ArticleId, DeleteOutcome, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};

use crate::config::NewsdeskConfig;

/// Endpoint and page window shared by the client commands
#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Article server base URL (default: http://127.0.0.1:3030)
    #[arg(long, env = "NEWSDESK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Page number, starting at 1 (0 means the default)
    #[arg(long, default_value_t = u64::from(DEFAULT_PAGE))]
    pub page: u64,

    /// Articles per page (0 means the default)
    #[arg(long, default_value_t = u64::from(DEFAULT_LIMIT))]
    pub limit: u64,

    /// Print the page as JSON (for piping to jq)
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Article ID to delete
    pub id: i64,

    #[command(flatten)]
    pub page: PageArgs,
}

fn open_view(args: &PageArgs, config: &NewsdeskConfig) -> Result<FeedView<HttpArticleApi>> {
    let endpoint = config.endpoint(args.endpoint.clone());
    tracing::debug!(%endpoint, "using article server");

    let api = HttpArticleApi::new(endpoint).context("Failed to build HTTP client")?;
    Ok(FeedView::new(api, PageRequest::or_defaults(args.page, args.limit)))
}

async fn load(view: &mut FeedView<HttpArticleApi>) -> Result<()> {
    view.refresh().await;
    if let ViewState::Failed { message } = view.state() {
        bail!("{}", message);
    }
    Ok(())
}

/// Print one page of articles
pub async fn run_list(args: ListArgs, config: &NewsdeskConfig) -> Result<()> {
    let mut view = open_view(&args.page, config)?;
    load(&mut view).await?;
    print_articles(view.articles(), args.page.json)
}

/// Delete an article on the current page and print the reconciled page
pub async fn run_delete(args: DeleteArgs, config: &NewsdeskConfig) -> Result<()> {
    let mut view = open_view(&args.page, config)?;
    load(&mut view).await?;

    let id = ArticleId::new(args.id);
    let resolution = view.delete(id).await?;

    match resolution {
        DeleteResolution::Confirmed(DeleteOutcome::Deleted) => {
            eprintln!("Article {} deleted", id);
        }
        DeleteResolution::Confirmed(DeleteOutcome::NotFound) => {
            eprintln!("Article {} was already gone", id);
        }
        DeleteResolution::Reconcile => {
            if let Some(notice) = view.notice() {
                eprintln!("{}", notice);
            }
            if let ViewState::Failed { message } = view.state() {
                eprintln!("{}", message);
            }
        }
    }

    print_articles(view.articles(), args.page.json)?;

    if resolution == DeleteResolution::Reconcile {
        bail!("article {} was not deleted", id);
    }
    Ok(())
}

fn print_articles(articles: &[Article], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    for article in articles {
        println!("{:>6}  {}", article.id, article.headline);
        println!("        {}", article.url);
    }
    Ok(())
}
