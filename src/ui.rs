use crate::ledger::{GOAL_AMOUNT, SavingLedger};
use crate::summary::format_thousands;
use crate::theme::Theme;

pub fn render_index(ledger: &SavingLedger, theme: Theme) -> String {
    let summary = ledger.summary().to_view();
    INDEX_HTML
        .replace("{{BODY_CLASS}}", if theme.is_dark() { "dark-mode" } else { "" })
        .replace("{{THEME_LABEL}}", theme.label())
        .replace("{{GOAL}}", &format_thousands(GOAL_AMOUNT))
        .replace("{{CURRENT_SAVED}}", &summary.current_saved)
        .replace("{{AMOUNT_NEEDED}}", &summary.amount_needed)
        .replace("{{PROGRESS_WIDTH}}", &summary.progress_width)
        .replace("{{PROGRESS_LABEL}}", &summary.progress_label)
        .replace("{{GRID}}", &render_grid(ledger))
}

/// One cell per day, in order. Replaces the whole grid.
pub fn render_grid(ledger: &SavingLedger) -> String {
    let mut out = String::with_capacity(ledger.records().len() * 56);
    for (index, record) in ledger.records().iter().enumerate() {
        let class = if record.is_saved {
            "saving-item saved"
        } else {
            "saving-item"
        };
        out.push_str(&format!(
            r#"<div class="{class}" data-index="{index}">{}</div>"#,
            record.amount
        ));
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>365-Day Saving Challenge</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --card: rgba(255, 255, 255, 0.9);
      --cell: #ffffff;
      --accent: #2d7a4b;
      --muted: #8b857d;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body.dark-mode {
      --bg: #1d1f24;
      --ink: #ecebe8;
      --card: rgba(40, 43, 50, 0.92);
      --cell: #2b2f36;
      --accent: #4fbf7a;
      --muted: #a59f97;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      transition: background 200ms ease, color 200ms ease;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--cell);
      color: var(--ink);
      box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--cell);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
    }

    .progress {
      background: var(--cell);
      border-radius: 999px;
      overflow: hidden;
      height: 28px;
    }

    #progress-bar {
      height: 100%;
      background: var(--accent);
      color: white;
      font-size: 0.85rem;
      font-weight: 600;
      display: flex;
      align-items: center;
      justify-content: center;
      transition: width 250ms ease;
    }

    #saving-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(52px, 1fr));
      gap: 6px;
    }

    .saving-item {
      background: var(--cell);
      border-radius: 10px;
      padding: 10px 0;
      text-align: center;
      font-weight: 600;
      cursor: pointer;
      user-select: none;
    }

    .saving-item.saved {
      background: var(--accent);
      color: white;
      text-decoration: line-through;
    }

    .status {
      font-size: 0.95rem;
      color: #c63b2b;
      min-height: 1.2em;
    }
  </style>
</head>
<body class="{{BODY_CLASS}}">
  <main class="app">
    <header>
      <div>
        <h1>365-Day Saving Challenge</h1>
        <p class="subtitle">Day N saves N baht. Goal: {{GOAL}} THB.</p>
      </div>
      <form id="theme-form" method="post" action="/theme/toggle">
        <button id="theme-toggle" type="submit">{{THEME_LABEL}}</button>
      </form>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Saved</span>
        <span id="current-saved" class="value">{{CURRENT_SAVED}}</span>
      </div>
      <div class="stat">
        <span class="label">Still needed</span>
        <span id="amount-needed" class="value">{{AMOUNT_NEEDED}}</span>
      </div>
    </section>

    <div class="progress">
      <div id="progress-bar" style="width: {{PROGRESS_WIDTH}}">{{PROGRESS_LABEL}}</div>
    </div>

    <div class="status" id="status"></div>

    <section id="saving-grid">{{GRID}}</section>
  </main>

  <script>
    const gridEl = document.getElementById('saving-grid');
    const savedEl = document.getElementById('current-saved');
    const neededEl = document.getElementById('amount-needed');
    const progressEl = document.getElementById('progress-bar');
    const themeBtn = document.getElementById('theme-toggle');
    const themeForm = document.getElementById('theme-form');
    const statusEl = document.getElementById('status');

    const setStatus = (message) => {
      statusEl.textContent = message;
    };

    const applyUpdate = (update) => {
      if (update.kind === 'mark_cell') {
        const cell = gridEl.querySelector(`[data-index="${update.index}"]`);
        if (cell) {
          cell.classList.toggle('saved', update.saved);
        }
      } else if (update.kind === 'summary') {
        savedEl.textContent = update.current_saved;
        neededEl.textContent = update.amount_needed;
        progressEl.style.width = update.progress_width;
        progressEl.textContent = update.progress_label;
      } else if (update.kind === 'theme') {
        document.body.classList.toggle('dark-mode', update.dark);
        themeBtn.textContent = update.label;
      }
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const toggleDay = async (index) => {
      let result = await post('/api/toggle', { index });
      if (result.status === 'confirmation_required') {
        const confirmed = window.confirm(result.prompt);
        result = await post('/api/toggle', { index, confirmed });
      }
      result.updates.forEach(applyUpdate);
      setStatus('');
    };

    gridEl.addEventListener('click', (event) => {
      const cell = event.target.closest('.saving-item');
      if (!cell) {
        return;
      }
      toggleDay(Number(cell.dataset.index)).catch((err) => setStatus(err.message));
    });

    themeForm.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/theme/toggle')
        .then((result) => result.updates.forEach(applyUpdate))
        .catch((err) => setStatus(err.message));
    });
  </script>
</body>
</html>
"#;
