use crate::api::ApiClient;
use crate::cli::{Cli, Command};
use crate::config::{base_url_from, resolve_base_url};
use crate::ui::{render_line, render_report};
use crate::widget::Widget;
use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{info, warn};

pub async fn run(cli: Cli) -> io::Result<bool> {
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {err}");
        }
    };
    run_until(cli, shutdown, &mut io::stdout()).await
}

/// Runs one command and reports whether the view ended without an error.
/// `shutdown` only matters for `watch`.
pub async fn run_until<F, W>(cli: Cli, shutdown: F, out: &mut W) -> io::Result<bool>
where
    F: Future<Output = ()>,
    W: Write,
{
    let base_url = match cli.base_url.clone() {
        Some(url) => base_url_from(Some(url)),
        None => resolve_base_url(),
    };
    info!("using api at {base_url}");
    let mut widget = Widget::new(ApiClient::new(base_url));

    match cli.command() {
        Command::Watch { refresh } => {
            let refresh = refresh.filter(|secs| *secs > 0).map(Duration::from_secs);
            watch_until(&mut widget, refresh, shutdown, out).await?;
            return Ok(widget.view().error_text.is_empty());
        }
        Command::Status => {
            // First load establishes the baseline the alert reports on.
            widget.fetch_status(false).await;
            widget.fetch_status(true).await;
        }
        Command::Start => widget.start().await,
        Command::Stop => widget.stop().await,
        Command::Total => widget.show_total().await,
        Command::Reset => widget.reset().await,
    }

    write!(out, "{}", render_report(widget.view(), &widget.elapsed()))?;
    out.flush()?;
    Ok(widget.view().error_text.is_empty())
}

/// Redraws the elapsed line on every frame until `shutdown` resolves.
pub async fn watch_until<F, W>(
    widget: &mut Widget,
    refresh: Option<Duration>,
    shutdown: F,
    out: &mut W,
) -> io::Result<()>
where
    F: Future<Output = ()>,
    W: Write,
{
    widget.fetch_status(false).await;

    let mut frames = widget.subscribe();
    let mut refresh_timer = refresh.map(|period| {
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    });
    tokio::pin!(shutdown);

    draw(out, widget)?;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = next_refresh(&mut refresh_timer) => {
                widget.fetch_status(false).await;
            }
        }
        draw(out, widget)?;
    }

    writeln!(out)?;
    out.flush()?;
    info!("watch stopped");
    Ok(())
}

async fn next_refresh(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn draw(out: &mut impl Write, widget: &Widget) -> io::Result<()> {
    write!(out, "\r\x1b[2K{}", render_line(widget.view(), &widget.elapsed()))?;
    out.flush()
}
