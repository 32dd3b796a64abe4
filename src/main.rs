use anyhow::{Context, Result};
use ircsync::app::creators;
use ircsync::app::event::Event;
use ircsync::app::handler;
use ircsync::app::state::AppState;
use ircsync::bridge::{self, codec, BridgeEvent};
use ircsync::config::{self, AppConfig};
use ircsync::logging::{self, EventJournal};
use ircsync::ui;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_config()?;
    logging::init_tracing(&cfg.log_level);

    if let Err(e) = run_app(cfg).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(cfg: AppConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<BridgeEvent>();

    let mut state = AppState::new();
    let mut journal = EventJournal::new(&cfg.journal);
    let mut out = tokio::io::stdout();

    bridge::spawn_reader(BufReader::new(tokio::io::stdin()), event_tx);

    // Auto-connect servers from config
    for srv_cfg in cfg.servers.iter().filter(|s| s.auto_connect) {
        let nick = cfg.nick_for(srv_cfg);
        for event in creators::connect_form(&srv_cfg.address(), &nick, srv_cfg.options()) {
            apply(&mut state, &mut journal, &mut out, event).await?;
        }
    }

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        match event {
            BridgeEvent::Frame(event) => apply(&mut state, &mut journal, &mut out, event).await?,
            BridgeEvent::Closed => break,
        }
    }

    tracing::info!("{}", state.status_line());

    let snapshot = codec::encode_snapshot(&state.servers)?;
    write_line(&mut out, &snapshot).await?;

    if cfg.ui.show_tabs {
        for line in ui::render_lines(&state, cfg.ui.tab_width) {
            eprintln!("{}", line);
        }
    }

    Ok(())
}

async fn apply<W>(
    state: &mut AppState,
    journal: &mut EventJournal,
    out: &mut W,
    event: Event,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    journal.record(&event);
    for action in handler::handle_event(state, event) {
        let line = codec::encode_action(&action)?;
        write_line(out, &line).await?;
    }
    Ok(())
}

async fn write_line<W>(out: &mut W, line: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes())
        .await
        .context("failed to write to socket output")?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}
