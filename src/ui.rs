pub fn render_index(last_updated: &str) -> String {
    INDEX_HTML.replace("{{UPDATED}}", last_updated)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sunday Show Ledger</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f5fb;
      --bg-2: #dfe3f7;
      --ink: #232336;
      --accent: #6366f1;
      --accent-2: #10b981;
      --danger: #e11d48;
      --muted: #6b7280;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(49, 46, 129, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef0fb 60%, #f7f4ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1060px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 8px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .updated {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(49, 46, 129, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(49, 46, 129, 0.12);
    }

    .hidden {
      display: none !important;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(49, 46, 129, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b8d9d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: #2f3558;
    }

    .stat .value.gain {
      color: var(--accent-2);
    }

    .stat .value.loss {
      color: var(--danger);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(49, 46, 129, 0.08);
    }

    .card h3 {
      margin: 0 0 12px;
      font-size: 1.05rem;
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(49, 46, 129, 0.12);
    }

    .chart-axis {
      stroke: rgba(49, 46, 129, 0.25);
      stroke-dasharray: 4 6;
    }

    .chart-label {
      fill: #7a7d91;
      font-size: 11px;
    }

    .legend {
      display: flex;
      gap: 18px;
      font-size: 0.85rem;
      color: var(--muted);
      margin-bottom: 8px;
    }

    .legend .dot {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 999px;
      margin-right: 6px;
    }

    .month-cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 14px;
    }

    .month-card {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(49, 46, 129, 0.08);
      border-left: 5px solid var(--accent-2);
      display: grid;
      gap: 8px;
    }

    .month-card.loss {
      border-left-color: var(--danger);
    }

    .month-card h4 {
      margin: 0;
      text-transform: capitalize;
    }

    .month-card .row {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
    }

    .badge {
      font-size: 0.75rem;
      background: #eef2ff;
      color: #4338ca;
      border-radius: 999px;
      padding: 2px 10px;
      width: fit-content;
    }

    .badge.settled {
      background: #ecfdf5;
      color: #047857;
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      flex-wrap: wrap;
      gap: 10px;
    }

    .month-switch {
      display: flex;
      align-items: center;
      gap: 10px;
      background: rgba(49, 46, 129, 0.06);
      border-radius: 999px;
      padding: 6px;
    }

    .month-switch span {
      min-width: 140px;
      text-align: center;
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 9px 16px;
      font-size: 0.88rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      font-family: inherit;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(99, 102, 241, 0.3);
    }

    .btn-green {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(16, 185, 129, 0.3);
    }

    .btn-ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid rgba(49, 46, 129, 0.15);
    }

    .btn-icon {
      padding: 6px 10px;
      background: transparent;
      color: var(--muted);
    }

    .btn-icon:hover {
      color: var(--danger);
    }

    .settle-bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      border-radius: 18px;
      padding: 16px;
      border: 2px solid #cbd5e1;
      background: #f8fafc;
    }

    .settle-bar.settled {
      border-color: #6ee7b7;
      background: #ecfdf5;
    }

    .settle-bar .title {
      font-weight: 700;
    }

    .settle-bar .hint-line {
      font-size: 0.82rem;
      color: var(--muted);
      max-width: 420px;
    }

    .event-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
      padding: 12px 0;
      border-bottom: 1px solid rgba(49, 46, 129, 0.08);
    }

    .event-item:last-child {
      border-bottom: none;
    }

    .event-date {
      width: 58px;
      height: 58px;
      border-radius: 14px;
      background: #f1f5f9;
      display: grid;
      place-items: center;
      font-weight: 700;
      font-size: 1.3rem;
      color: #334155;
      flex-shrink: 0;
    }

    .event-main {
      flex: 1;
      min-width: 0;
    }

    .event-bands {
      font-weight: 600;
      font-size: 0.92rem;
    }

    .event-meta {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .event-profit {
      font-weight: 700;
      font-size: 1.05rem;
      white-space: nowrap;
    }

    .gain {
      color: var(--accent-2);
    }

    .loss-text {
      color: var(--danger);
    }

    .list-row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
      padding: 8px 0;
      border-bottom: 1px solid rgba(49, 46, 129, 0.06);
      font-size: 0.9rem;
    }

    .list-row:last-child {
      border-bottom: none;
    }

    form.grid {
      display: grid;
      gap: 10px;
    }

    label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b8d9d;
      display: grid;
      gap: 4px;
    }

    input {
      border: 1px solid rgba(49, 46, 129, 0.18);
      border-radius: 10px;
      padding: 9px 10px;
      font-size: 0.95rem;
      font-family: inherit;
      width: 100%;
    }

    .two-col {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 10px;
    }

    .band-row, .cost-row {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    .band-row input.time {
      width: 82px;
    }

    .band-row input.fee, .cost-row input.fee {
      width: 96px;
    }

    .sundays {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 12px;
    }

    .sunday-card {
      border: 1px solid rgba(49, 46, 129, 0.1);
      border-radius: 16px;
      padding: 12px;
      background: white;
      display: grid;
      gap: 8px;
      min-height: 120px;
    }

    .sunday-card.empty {
      border-style: dashed;
      color: var(--muted);
      place-items: center;
      cursor: pointer;
    }

    .sunday-card .day {
      font-weight: 700;
      font-size: 1.2rem;
    }

    .sunday-card .slot {
      font-size: 0.8rem;
      color: #475569;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(15, 23, 42, 0.55);
      display: grid;
      place-items: center;
      padding: 18px;
      z-index: 40;
    }

    .modal {
      background: white;
      border-radius: 20px;
      padding: 24px;
      width: min(560px, 100%);
      max-height: 90vh;
      overflow-y: auto;
      display: grid;
      gap: 14px;
    }

    .modal h3 {
      margin: 0;
    }

    .modal-actions {
      display: flex;
      gap: 10px;
      justify-content: flex-end;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .section-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      flex-wrap: wrap;
      gap: 10px;
    }

    .empty-note {
      color: var(--muted);
      font-size: 0.9rem;
      font-style: italic;
      padding: 10px 0;
    }

    .tab-panel {
      display: grid;
      gap: 18px;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 22px 16px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Sunday Show Ledger</h1>
        <p class="subtitle">Bookings, door money and the running tab with the house.</p>
      </div>
      <div style="display:grid;gap:6px;justify-items:end">
        <span class="updated">Last change: <span id="updated">{{UPDATED}}</span></span>
        <button class="btn-ghost" type="button" id="reset-btn">Reset data</button>
      </div>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="dashboard">Dashboard</button>
      <button class="tab" type="button" data-tab="financial">Financial</button>
      <button class="tab" type="button" data-tab="agenda">Agenda</button>
      <button class="tab" type="button" data-tab="expenses">Consumption</button>
    </div>

    <section id="tab-dashboard" class="tab-panel">
      <div class="panel">
        <div class="stat">
          <span class="label">Accumulated profit</span>
          <span class="value" id="dash-profit">R$ 0</span>
        </div>
        <div class="stat">
          <span class="label">Gross revenue</span>
          <span class="value" id="dash-revenue">R$ 0</span>
        </div>
        <div class="stat">
          <span class="label">Months on record</span>
          <span class="value" id="dash-months">0</span>
        </div>
      </div>
      <div class="card">
        <h3>Monthly flow</h3>
        <div class="legend">
          <span><span class="dot" style="background:#6366f1"></span>Revenue</span>
          <span><span class="dot" style="background:#10b981"></span>Profit</span>
        </div>
        <svg id="chart" viewBox="0 0 720 280" role="img" aria-label="Revenue and profit per month"></svg>
      </div>
      <div>
        <h3 style="margin:0 0 12px">Month by month</h3>
        <div class="month-cards" id="month-cards"></div>
      </div>
    </section>

    <section id="tab-financial" class="tab-panel hidden">
      <div class="month-nav">
        <div class="month-switch">
          <button class="btn-ghost" type="button" id="prev-month">&lsaquo;</button>
          <span id="month-label"></span>
          <button class="btn-ghost" type="button" id="next-month">&rsaquo;</button>
        </div>
        <div style="display:flex;gap:8px">
          <button class="btn-green" type="button" id="add-payment-btn">+ Payment</button>
          <button class="btn-primary" type="button" id="add-event-btn">+ Event</button>
        </div>
      </div>

      <div class="settle-bar" id="settle-bar">
        <div>
          <div class="title" id="settle-title"></div>
          <div class="hint-line" id="settle-hint"></div>
        </div>
        <div style="display:flex;align-items:center;gap:16px">
          <div style="text-align:right">
            <div class="label" style="font-size:0.72rem;text-transform:uppercase;color:#8b8d9d">Outstanding (reference)</div>
            <div style="font-weight:700" id="settle-outstanding"></div>
          </div>
          <button class="btn-primary" type="button" id="settle-toggle"></button>
        </div>
      </div>

      <div class="panel">
        <div class="stat">
          <span class="label">Event revenue</span>
          <span class="value" id="fin-revenue"></span>
        </div>
        <div class="stat">
          <span class="label">Total costs</span>
          <span class="value loss" id="fin-cost"></span>
        </div>
        <div class="stat">
          <span class="label">Operating profit</span>
          <span class="value" id="fin-profit"></span>
        </div>
        <div class="stat">
          <span class="label">Personal consumption</span>
          <span class="value loss" id="fin-expenses"></span>
        </div>
      </div>

      <div class="card">
        <h3>Events this month</h3>
        <div id="event-list"></div>
      </div>

      <div class="card">
        <div class="section-head">
          <h3 style="margin:0">Month closing</h3>
          <span class="badge" id="closing-net"></span>
        </div>
        <div class="list-row"><span>Operating profit</span><strong id="close-profit"></strong></div>
        <div class="list-row"><span>Personal consumption</span><strong class="loss-text" id="close-expenses"></strong></div>
        <div class="list-row"><span>Net result</span><strong id="close-net"></strong></div>
        <h3 style="margin-top:16px">Payments received this month</h3>
        <div id="payment-list"></div>
      </div>
    </section>

    <section id="tab-agenda" class="tab-panel hidden">
      <div class="section-head">
        <div>
          <h3 style="margin:0">Next 8 Sundays</h3>
          <p class="subtitle">Click an open Sunday to book it.</p>
        </div>
        <button class="btn-primary" type="button" id="agenda-new-btn">+ Booking</button>
      </div>
      <div class="sundays" id="sunday-grid"></div>
      <div class="card">
        <h3>All scheduled events</h3>
        <div id="scheduled-list"></div>
      </div>
    </section>

    <section id="tab-expenses" class="tab-panel hidden">
      <div class="panel">
        <div class="stat">
          <span class="label">Total consumed</span>
          <span class="value" id="exp-original"></span>
        </div>
        <div class="stat">
          <span class="label">Saved by discount</span>
          <span class="value gain" id="exp-saved"></span>
        </div>
        <div class="stat">
          <span class="label">Deducted from profit</span>
          <span class="value loss" id="exp-final"></span>
        </div>
      </div>
      <div class="card">
        <h3>Tab calculator</h3>
        <form class="grid" id="expense-form">
          <div class="two-col">
            <label>Date<input type="date" id="exp-date" required /></label>
            <label>Description<input type="text" id="exp-desc" placeholder="Whisky + energy drink" /></label>
          </div>
          <div class="two-col">
            <label>Bill value (R$)<input type="number" step="0.01" id="exp-value" required /></label>
            <label>Discount (%)<input type="number" step="0.1" id="exp-discount" value="15" /></label>
          </div>
          <div class="list-row"><span>To pay (deducted)</span><strong id="exp-preview">R$ 0,00</strong></div>
          <button class="btn-primary" type="submit">Add to the tab</button>
        </form>
      </div>
      <div class="card">
        <h3>Expense history</h3>
        <div id="expense-list"></div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div id="modal-root"></div>
  <datalist id="band-suggestions"></datalist>

  <script>
    const statusEl = document.getElementById('status');
    const modalRoot = document.getElementById('modal-root');

    let appState = null;
    let monthView = null;
    let chartData = null;
    let activeTab = 'dashboard';
    let currentMonth = new Date().toISOString().slice(0, 7);

    const money = (v) =>
      'R$ ' + Number(v || 0).toLocaleString('pt-BR', { maximumFractionDigits: 2 });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (type === 'ok') {
        setTimeout(() => { statusEl.textContent = ''; statusEl.dataset.type = ''; }, 1500);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || ('Request failed: ' + res.status));
      }
      if (res.status === 204) return null;
      return res.json();
    };

    const postJson = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const putJson = (path, body) =>
      api(path, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const del = (path) => api(path, { method: 'DELETE' });

    const monthLabel = (key) => {
      const parts = key.split('-');
      const d = new Date(Number(parts[0]), Number(parts[1]) - 1, 1);
      return d.toLocaleDateString('en-GB', { month: 'long', year: 'numeric' });
    };

    const dayOf = (date) => Number(date.slice(8, 10));

    const weekdayOf = (date) => {
      const parts = date.split('-').map(Number);
      return new Date(parts[0], parts[1] - 1, parts[2])
        .toLocaleDateString('en-GB', { weekday: 'short' });
    };

    const shiftMonth = (key, delta) => {
      const parts = key.split('-').map(Number);
      const d = new Date(parts[0], parts[1] - 1 + delta, 1);
      return d.getFullYear() + '-' + String(d.getMonth() + 1).padStart(2, '0');
    };

    const refreshBandSuggestions = () => {
      const list = document.getElementById('band-suggestions');
      list.innerHTML = (appState.bandPresets || [])
        .map((p) => '<option value="' + escapeHtml(p.name) + '"></option>')
        .join('');
    };

    function escapeHtml(text) {
      const div = document.createElement('div');
      div.textContent = text == null ? '' : String(text);
      return div.innerHTML;
    }

    const loadState = async () => {
      appState = await api('/api/state');
      refreshBandSuggestions();
      const updatedEl = document.getElementById('updated');
      updatedEl.textContent = new Date(appState.lastUpdated).toLocaleString('en-GB');
    };

    const loadChart = async () => {
      chartData = await api('/api/chart');
    };

    const loadMonth = async () => {
      monthView = await api('/api/months/' + currentMonth);
    };

    const refresh = async () => {
      await Promise.all([loadState(), loadChart(), loadMonth()]);
      renderActiveTab();
    };

    // ---- dashboard ----

    const renderChart = (labels, seriesList) => {
      const chartEl = document.getElementById('chart');
      if (!labels.length) {
        chartEl.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No realized events yet</text>';
        return;
      }

      const width = 720;
      const height = 280;
      const paddingX = 54;
      const paddingY = 34;
      const top = 20;

      const all = seriesList.flatMap((s) => s.values);
      let min = Math.min(...all, 0);
      let max = Math.max(...all, 0);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = labels.length > 1 ? (width - paddingX * 2) / (labels.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (i) => paddingX + i * xStep;
      const y = (v) => height - paddingY - (v - min) * scaleY;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += '<line class="chart-grid" x1="' + paddingX + '" y1="' + yPos +
          '" x2="' + (width - paddingX) + '" y2="' + yPos + '" />';
        grid += '<text class="chart-label" x="' + (paddingX - 10) + '" y="' + (yPos + 4) +
          '" text-anchor="end">' + Math.round(value) + '</text>';
      }

      const labelEvery = labels.length > 9 ? 2 : 1;
      const xLabels = labels
        .map((label, i) => {
          if (i % labelEvery !== 0) return '';
          return '<text class="chart-label" x="' + x(i) + '" y="' + (height - paddingY + 18) +
            '" text-anchor="middle">' + label + '</text>';
        })
        .join('');

      const zeroLine = '<line class="chart-axis" x1="' + paddingX + '" y1="' + y(0) +
        '" x2="' + (width - paddingX) + '" y2="' + y(0) + '" />';

      const paths = seriesList
        .map((s) => {
          const path = s.values
            .map((v, i) => (i === 0 ? 'M ' : 'L ') + x(i).toFixed(2) + ' ' + y(v).toFixed(2))
            .join(' ');
          const dots = s.values
            .map((v, i) => '<circle cx="' + x(i) + '" cy="' + y(v) +
              '" r="3.5" fill="white" stroke="' + s.color + '" stroke-width="2" />')
            .join('');
          return '<path d="' + path + '" fill="none" stroke="' + s.color + '" stroke-width="3" />' + dots;
        })
        .join('');

      chartEl.innerHTML = grid + zeroLine + paths + xLabels;
    };

    const renderDashboard = async () => {
      document.getElementById('dash-profit').textContent = money(chartData.totalProfit);
      document.getElementById('dash-revenue').textContent = money(chartData.totalRevenue);
      document.getElementById('dash-months').textContent = chartData.series.length;

      const labels = chartData.series.map((p) => p.monthKey.slice(5) + '/' + p.monthKey.slice(2, 4));
      renderChart(labels, [
        { color: '#6366f1', values: chartData.series.map((p) => p.revenue) },
        { color: '#10b981', values: chartData.series.map((p) => p.profit) }
      ]);

      const keys = chartData.series.map((p) => p.monthKey).reverse();
      const views = await Promise.all(keys.map((k) => api('/api/months/' + k)));
      const cards = document.getElementById('month-cards');
      if (!views.length) {
        cards.innerHTML = '<p class="empty-note">No closed months yet. Realize events in the agenda to see statistics.</p>';
        return;
      }
      cards.innerHTML = views
        .map((view) => {
          const s = view.summary;
          const lossClass = s.profit >= 0 ? '' : ' loss';
          const best = s.bestEventValue > 0
            ? '<span class="badge">Best day: ' + escapeHtml(s.bestEventLabel) +
              ' (+' + Math.round(s.bestEventValue) + ')</span>'
            : '';
          const settled = view.settled ? '<span class="badge settled">Settled</span>' : '';
          return '<div class="month-card' + lossClass + '">' +
            '<h4>' + monthLabel(view.month) + '</h4>' +
            '<div class="row"><span>Net profit</span><strong class="' +
            (s.profit >= 0 ? 'gain' : 'loss-text') + '">' + money(s.profit) + '</strong></div>' +
            '<div class="row"><span>Gross revenue</span><strong>' + money(s.revenue) + '</strong></div>' +
            '<div class="row"><span>Events</span><strong>' + s.eventCount + '</strong></div>' +
            best + settled +
            '</div>';
        })
        .join('');
    };

    // ---- financial ----

    const renderFinancial = () => {
      const view = monthView;
      const s = view.summary;
      document.getElementById('month-label').textContent = monthLabel(view.month);
      document.getElementById('fin-revenue').textContent = money(s.revenue);
      document.getElementById('fin-cost').textContent = money(s.cost);
      const profitEl = document.getElementById('fin-profit');
      profitEl.textContent = money(s.profit);
      profitEl.className = 'value ' + (s.profit >= 0 ? 'gain' : 'loss');
      document.getElementById('fin-expenses').textContent = '- ' + money(view.expensesTotal);

      const bar = document.getElementById('settle-bar');
      bar.className = 'settle-bar' + (view.settled ? ' settled' : '');
      document.getElementById('settle-title').textContent = view.settled
        ? 'Accounts settled with the house'
        : 'Month still open';
      document.getElementById('settle-hint').textContent = view.settled
        ? 'You confirmed this month was discussed and closed. Toggle to reopen.'
        : 'Mark it settled once you square up with the owner. The balance beside is only a reference.';
      document.getElementById('settle-outstanding').textContent = money(view.outstanding);
      document.getElementById('settle-toggle').textContent = view.settled
        ? 'Reopen month'
        : 'Mark as settled';

      const list = document.getElementById('event-list');
      if (!view.events.length) {
        list.innerHTML = '<p class="empty-note">No realized events in this month.</p>';
      } else {
        list.innerHTML = view.events
          .map((e) => {
            const bands = e.bands.length
              ? e.bands.map((b) =>
                  escapeHtml(b.name || 'Band to be confirmed') +
                  ' <span class="event-meta">' + escapeHtml(b.time) + '</span>').join('<br>')
              : '<span class="event-meta">No line-up recorded</span>';
            const sign = e.profit < 0 ? '- ' : '+ ';
            return '<div class="event-item">' +
              '<div class="event-date"><span>' + dayOf(e.date) + '</span></div>' +
              '<div class="event-main">' +
              '<div class="event-bands">' + bands + '</div>' +
              '<div class="event-meta">' + weekdayOf(e.date) + ' · audience ' + e.audience +
              ' · cost ' + money(e.cost) + '</div></div>' +
              '<div style="text-align:right">' +
              '<div class="event-profit ' + (e.profit < 0 ? 'loss-text' : 'gain') + '">' +
              sign + money(Math.abs(e.profit)) + '</div>' +
              '<button class="btn-icon" type="button" data-edit="' + e.id + '">Edit</button>' +
              '<button class="btn-icon" type="button" data-del-event="' + e.id + '">Delete</button>' +
              '</div></div>';
          })
          .join('');
      }

      const net = s.profit - view.expensesTotal;
      document.getElementById('close-profit').textContent = money(s.profit);
      document.getElementById('close-expenses').textContent = '- ' + money(view.expensesTotal);
      document.getElementById('close-net').textContent = money(net);
      document.getElementById('closing-net').textContent = 'Net ' + money(net);

      const payments = document.getElementById('payment-list');
      if (!view.payments.length) {
        payments.innerHTML = '<p class="empty-note">No payments recorded in this month.</p>';
      } else {
        payments.innerHTML = view.payments
          .map((p) =>
            '<div class="list-row"><span>' + escapeHtml(p.note || 'Advance payment') +
            ' <span class="event-meta">' + escapeHtml(p.date) + '</span></span>' +
            '<span><strong class="gain">' + money(p.amount) + '</strong>' +
            ' <button class="btn-icon" type="button" data-del-payment="' + p.id + '">x</button></span></div>')
          .join('') +
          '<div class="list-row"><span><strong>Total received</strong></span><strong class="gain">' +
          money(view.paymentsTotal) + '</strong></div>';
      }
    };

    // ---- agenda ----

    const nextSundays = () => {
      const out = [];
      const d = new Date();
      d.setDate(d.getDate() + ((7 - d.getDay()) % 7));
      for (let i = 0; i < 8; i += 1) {
        out.push(d.getFullYear() + '-' + String(d.getMonth() + 1).padStart(2, '0') +
          '-' + String(d.getDate()).padStart(2, '0'));
        d.setDate(d.getDate() + 7);
      }
      return out;
    };

    const renderAgenda = () => {
      const scheduled = appState.events.filter((e) => e.status === 'scheduled');
      const byDate = Object.fromEntries(scheduled.map((e) => [e.date, e]));

      const grid = document.getElementById('sunday-grid');
      grid.innerHTML = nextSundays()
        .map((date) => {
          const evt = byDate[date];
          if (!evt) {
            return '<div class="sunday-card empty" data-book="' + date + '">' +
              '<div style="text-align:center"><div class="day">' + dayOf(date) + '</div>' +
              '<div class="slot">' + monthLabel(date.slice(0, 7)).split(' ')[0] + '</div>' +
              '<div class="slot">+ book</div></div></div>';
          }
          const slots = evt.bands.slice(0, 3)
            .map((b) => '<div class="slot">' + escapeHtml(b.time) + ' ' +
              escapeHtml(b.name || '...') + '</div>')
            .join('');
          return '<div class="sunday-card">' +
            '<div class="day">' + dayOf(date) + '</div>' + slots +
            '<button class="btn-green" type="button" data-realize="' + evt.id +
            '">Move to financial</button></div>';
        })
        .join('');

      const list = document.getElementById('scheduled-list');
      if (!scheduled.length) {
        list.innerHTML = '<p class="empty-note">No upcoming events. Use the calendar above to book one.</p>';
        return;
      }
      list.innerHTML = scheduled
        .slice()
        .sort((a, b) => a.date.localeCompare(b.date))
        .map((e) => {
          const fee = e.bands.reduce((sum, b) => sum + b.value, 0);
          const bands = e.bands
            .map((b) => '<span class="event-meta">' + escapeHtml(b.time) + '</span> ' +
              escapeHtml(b.name)).join('<br>');
          return '<div class="event-item">' +
            '<div class="event-date"><span>' + dayOf(e.date) + '</span></div>' +
            '<div class="event-main"><div class="event-bands">' +
            (bands || '<span class="event-meta">No line-up yet</span>') + '</div>' +
            '<div class="event-meta">' + escapeHtml(e.date) + ' · estimated cost ' + money(fee) +
            '</div></div>' +
            '<div style="text-align:right">' +
            '<button class="btn-green" type="button" data-realize="' + e.id + '">Realize</button>' +
            '<button class="btn-icon" type="button" data-del-event="' + e.id + '">Delete</button>' +
            '</div></div>';
        })
        .join('');
    };

    // ---- expenses ----

    const renderExpenses = () => {
      const expenses = appState.personalExpenses || [];
      const totalOriginal = expenses.reduce((sum, e) => sum + e.originalValue, 0);
      const totalFinal = expenses.reduce((sum, e) => sum + e.finalValue, 0);
      document.getElementById('exp-original').textContent = money(totalOriginal);
      document.getElementById('exp-saved').textContent = money(totalOriginal - totalFinal);
      document.getElementById('exp-final').textContent = money(totalFinal);

      const list = document.getElementById('expense-list');
      if (!expenses.length) {
        list.innerHTML = '<p class="empty-note">Nothing on the tab yet.</p>';
        return;
      }
      list.innerHTML = expenses
        .slice()
        .sort((a, b) => b.date.localeCompare(a.date))
        .map((e) =>
          '<div class="list-row"><span>' + escapeHtml(e.description) +
          ' <span class="event-meta">' + escapeHtml(e.date) + ' · ' + e.discountPercent +
          '% off</span></span>' +
          '<span><strong class="loss-text">- ' + money(e.finalValue) + '</strong>' +
          ' <button class="btn-icon" type="button" data-del-expense="' + e.id + '">x</button></span></div>')
        .join('');
    };

    const renderActiveTab = () => {
      if (activeTab === 'dashboard') renderDashboard().catch((err) => setStatus(err.message, 'error'));
      else if (activeTab === 'financial') renderFinancial();
      else if (activeTab === 'agenda') renderAgenda();
      else renderExpenses();
    };

    // ---- modals ----

    const closeModal = () => { modalRoot.innerHTML = ''; };

    const bandRowHtml = (band) =>
      '<div class="band-row" data-id="' + (band.id || '') + '">' +
      '<input class="time" value="' + escapeHtml(band.time || '') + '" placeholder="17:00" />' +
      '<input class="name" list="band-suggestions" value="' + escapeHtml(band.name || '') +
      '" placeholder="Band name" />' +
      '<input class="fee" type="number" step="0.01" value="' + (band.value || 0) + '" />' +
      '<button class="btn-icon" type="button" data-remove-row>x</button></div>';

    const costRowHtml = (cost) =>
      '<div class="cost-row" data-id="' + (cost.id || '') + '">' +
      '<input class="desc" value="' + escapeHtml(cost.description || '') + '" placeholder="Description" />' +
      '<input class="fee" type="number" step="0.01" value="' + (cost.value || 0) + '" />' +
      '<button class="btn-icon" type="button" data-remove-row>x</button></div>';

    const collectRows = (selector, build) =>
      Array.from(modalRoot.querySelectorAll(selector)).map(build).filter(Boolean);

    const hookRowButtons = () => {
      modalRoot.querySelectorAll('[data-remove-row]').forEach((btn) => {
        btn.onclick = () => btn.parentElement.remove();
      });
      modalRoot.querySelectorAll('.band-row .name').forEach((input) => {
        input.onchange = () => {
          const preset = (appState.bandPresets || []).find(
            (p) => p.name.toLowerCase() === input.value.toLowerCase());
          if (preset) {
            input.parentElement.querySelector('.fee').value = preset.lastValue;
          }
        };
      });
    };

    const openEventEditor = (event) => {
      modalRoot.innerHTML =
        '<div class="modal-backdrop"><div class="modal">' +
        '<h3>Event details · ' + escapeHtml(event.date) + '</h3>' +
        '<div class="two-col">' +
        '<label>Regular tickets<input id="ed-couvert-count" type="number" value="' + event.couvertCount + '" /></label>' +
        '<label>Ticket price (R$)<input id="ed-couvert-price" type="number" step="0.01" value="' + event.couvertPrice + '" /></label>' +
        '</div><div class="two-col">' +
        '<label>Promo tickets<input id="ed-promo-count" type="number" value="' + event.promoCount + '" /></label>' +
        '<label>Promo price (R$)<input id="ed-promo-price" type="number" step="0.01" value="' + event.promoPrice + '" /></label>' +
        '</div>' +
        '<div class="section-head"><strong>Line-up</strong>' +
        '<button class="btn-ghost" type="button" id="ed-add-band">+ band</button></div>' +
        '<div id="ed-bands">' + event.bands.map(bandRowHtml).join('') + '</div>' +
        '<div class="section-head"><strong>Extra costs</strong>' +
        '<button class="btn-ghost" type="button" id="ed-add-cost">+ cost</button></div>' +
        '<div id="ed-costs">' + event.extraCosts.map(costRowHtml).join('') + '</div>' +
        '<div class="modal-actions">' +
        '<button class="btn-ghost" type="button" id="ed-cancel">Cancel</button>' +
        '<button class="btn-primary" type="button" id="ed-save">Save everything</button>' +
        '</div></div></div>';

      hookRowButtons();
      document.getElementById('ed-cancel').onclick = closeModal;
      document.getElementById('ed-add-band').onclick = () => {
        document.getElementById('ed-bands').insertAdjacentHTML(
          'beforeend', bandRowHtml({ id: crypto.randomUUID(), time: '', name: '', value: 0 }));
        hookRowButtons();
      };
      document.getElementById('ed-add-cost').onclick = () => {
        document.getElementById('ed-costs').insertAdjacentHTML(
          'beforeend', costRowHtml({ id: crypto.randomUUID(), description: '', value: 0 }));
        hookRowButtons();
      };
      document.getElementById('ed-save').onclick = async () => {
        const bands = collectRows('#ed-bands .band-row', (row) => ({
          id: row.dataset.id || crypto.randomUUID(),
          time: row.querySelector('.time').value,
          name: row.querySelector('.name').value,
          value: Number(row.querySelector('.fee').value) || 0
        }));
        const extraCosts = collectRows('#ed-costs .cost-row', (row) => ({
          id: row.dataset.id || crypto.randomUUID(),
          description: row.querySelector('.desc').value,
          value: Number(row.querySelector('.fee').value) || 0
        }));
        const updated = {
          ...event,
          couvertCount: Number(document.getElementById('ed-couvert-count').value) || 0,
          couvertPrice: Number(document.getElementById('ed-couvert-price').value) || 0,
          promoCount: Number(document.getElementById('ed-promo-count').value) || 0,
          promoPrice: Number(document.getElementById('ed-promo-price').value) || 0,
          bands,
          extraCosts
        };
        try {
          await putJson('/api/events/' + event.id, updated);
          closeModal();
          setStatus('Saved', 'ok');
          await refresh();
        } catch (err) {
          setStatus(err.message, 'error');
        }
      };
    };

    const openBookingModal = (date) => {
      const rows = [
        { id: crypto.randomUUID(), time: '17:00', name: '', value: 0 },
        { id: crypto.randomUUID(), time: '20:00', name: '', value: 0 }
      ];
      modalRoot.innerHTML =
        '<div class="modal-backdrop"><div class="modal">' +
        '<h3>New booking</h3>' +
        '<label>Date<input type="date" id="bk-date" value="' + (date || '') + '" /></label>' +
        '<div class="section-head"><strong>Line-up</strong>' +
        '<button class="btn-ghost" type="button" id="bk-add-band">+ band</button></div>' +
        '<div id="bk-bands">' + rows.map(bandRowHtml).join('') + '</div>' +
        '<div class="modal-actions">' +
        '<button class="btn-ghost" type="button" id="bk-cancel">Cancel</button>' +
        '<button class="btn-primary" type="button" id="bk-save">Book event</button>' +
        '</div></div></div>';

      hookRowButtons();
      document.getElementById('bk-cancel').onclick = closeModal;
      document.getElementById('bk-add-band').onclick = () => {
        document.getElementById('bk-bands').insertAdjacentHTML(
          'beforeend', bandRowHtml({ id: crypto.randomUUID(), time: '', name: '', value: 0 }));
        hookRowButtons();
      };
      document.getElementById('bk-save').onclick = async () => {
        const bookingDate = document.getElementById('bk-date').value;
        if (!bookingDate) {
          setStatus('Pick a date first', 'error');
          return;
        }
        const bands = collectRows('#bk-bands .band-row', (row) => {
          const name = row.querySelector('.name').value;
          if (!name.trim()) return null;
          return {
            id: row.dataset.id || crypto.randomUUID(),
            time: row.querySelector('.time').value,
            name,
            value: Number(row.querySelector('.fee').value) || 0
          };
        });
        try {
          await postJson('/api/events', { date: bookingDate, status: 'scheduled', bands });
          closeModal();
          setStatus('Booked', 'ok');
          await refresh();
        } catch (err) {
          setStatus(err.message, 'error');
        }
      };
    };

    const openPaymentModal = () => {
      modalRoot.innerHTML =
        '<div class="modal-backdrop"><div class="modal">' +
        '<h3>Record payment</h3>' +
        '<label>Amount (R$)<input type="number" step="0.01" id="pm-amount" autofocus /></label>' +
        '<label>Date<input type="date" id="pm-date" value="' +
        new Date().toISOString().slice(0, 10) + '" /></label>' +
        '<label>Note<input type="text" id="pm-note" placeholder="Partial pix" /></label>' +
        '<div class="modal-actions">' +
        '<button class="btn-ghost" type="button" id="pm-cancel">Cancel</button>' +
        '<button class="btn-green" type="button" id="pm-save">Save</button>' +
        '</div></div></div>';
      document.getElementById('pm-cancel').onclick = closeModal;
      document.getElementById('pm-save').onclick = async () => {
        try {
          await postJson('/api/payments', {
            date: document.getElementById('pm-date').value,
            amount: Number(document.getElementById('pm-amount').value) || 0,
            note: document.getElementById('pm-note').value
          });
          closeModal();
          setStatus('Saved', 'ok');
          await refresh();
        } catch (err) {
          setStatus(err.message, 'error');
        }
      };
    };

    // ---- wiring ----

    document.querySelectorAll('.tab').forEach((button) => {
      button.addEventListener('click', () => {
        activeTab = button.dataset.tab;
        document.querySelectorAll('.tab').forEach((b) =>
          b.classList.toggle('active', b === button));
        document.querySelectorAll('.tab-panel').forEach((panel) =>
          panel.classList.toggle('hidden', panel.id !== 'tab-' + activeTab));
        renderActiveTab();
      });
    });

    document.getElementById('prev-month').onclick = async () => {
      currentMonth = shiftMonth(currentMonth, -1);
      await loadMonth();
      renderFinancial();
    };

    document.getElementById('next-month').onclick = async () => {
      currentMonth = shiftMonth(currentMonth, 1);
      await loadMonth();
      renderFinancial();
    };

    document.getElementById('settle-toggle').onclick = async () => {
      try {
        await postJson('/api/months/' + currentMonth + '/toggle');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('add-payment-btn').onclick = openPaymentModal;

    document.getElementById('add-event-btn').onclick = async () => {
      const date = currentMonth + '-01';
      try {
        const event = await postJson('/api/events', {
          date,
          status: 'done',
          bands: [
            { time: '17:00', name: '', value: 0 },
            { time: '20:00', name: '', value: 0 }
          ]
        });
        await refresh();
        openEventEditor(event);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('reset-btn').onclick = async () => {
      if (!confirm('Are you sure? This wipes every event, payment and expense.')) return;
      try {
        await postJson('/api/reset');
        setStatus('Data reset', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('agenda-new-btn').onclick = () => openBookingModal('');

    document.getElementById('expense-form').addEventListener('submit', async (e) => {
      e.preventDefault();
      try {
        await postJson('/api/expenses', {
          date: document.getElementById('exp-date').value,
          description: document.getElementById('exp-desc').value,
          originalValue: Number(document.getElementById('exp-value').value) || 0,
          discountPercent: Number(document.getElementById('exp-discount').value) || 0
        });
        document.getElementById('exp-value').value = '';
        document.getElementById('exp-desc').value = '';
        setStatus('Added to the tab', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const updateExpensePreview = () => {
      const value = Number(document.getElementById('exp-value').value) || 0;
      const discount = Number(document.getElementById('exp-discount').value) || 0;
      document.getElementById('exp-preview').textContent =
        money(value * (1 - discount / 100));
    };
    document.getElementById('exp-value').addEventListener('input', updateExpensePreview);
    document.getElementById('exp-discount').addEventListener('input', updateExpensePreview);
    document.getElementById('exp-date').value = new Date().toISOString().slice(0, 10);

    document.body.addEventListener('click', async (e) => {
      const target = e.target;
      if (!(target instanceof HTMLElement)) return;

      if (target.dataset.edit) {
        const event = appState.events.find((ev) => ev.id === target.dataset.edit);
        if (event) openEventEditor(event);
      } else if (target.dataset.delEvent) {
        if (!confirm('Delete this event? This cannot be undone.')) return;
        try {
          await del('/api/events/' + target.dataset.delEvent);
          await refresh();
        } catch (err) { setStatus(err.message, 'error'); }
      } else if (target.dataset.delPayment) {
        try {
          await del('/api/payments/' + target.dataset.delPayment);
          await refresh();
        } catch (err) { setStatus(err.message, 'error'); }
      } else if (target.dataset.delExpense) {
        try {
          await del('/api/expenses/' + target.dataset.delExpense);
          await refresh();
        } catch (err) { setStatus(err.message, 'error'); }
      } else if (target.dataset.realize) {
        if (!confirm('This moves the event to the financial tab so you can enter the real door numbers. Confirm?')) return;
        try {
          await postJson('/api/events/' + target.dataset.realize + '/realize');
          setStatus('Moved to financial', 'ok');
          await refresh();
        } catch (err) { setStatus(err.message, 'error'); }
      } else if (target.dataset.book) {
        openBookingModal(target.dataset.book);
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
