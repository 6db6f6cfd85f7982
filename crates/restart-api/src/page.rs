//! Front end page HTML
//!
//! Self-contained HTML/JS page that renders the connection widget and the
//! lock creation form from the JSON views and posts user actions back.

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Restart - Self-Lock Platform</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f3f4f6; color: #1f2937; }
        header { background: #111827; color: #fff; padding: 24px; display: flex; justify-content: space-between; align-items: center; }
        main { max-width: 720px; margin: 32px auto; padding: 0 16px; }
        .card { background: #fff; border-radius: 8px; padding: 24px; box-shadow: 0 4px 12px rgba(0,0,0,0.08); margin-bottom: 24px; }
        .notice { background: #fefce8; border: 1px solid #fde68a; color: #854d0e; text-align: center; }
        label { display: block; font-size: 14px; margin: 12px 0 4px; }
        input[type=text], input[type=number], textarea { width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; }
        .hint { font-size: 12px; color: #6b7280; margin-top: 4px; }
        button { border: 0; border-radius: 6px; padding: 8px 14px; color: #fff; font-weight: bold; cursor: pointer; }
        button:disabled { opacity: 0.6; cursor: default; }
        .primary { background: #2563eb; } .refresh { background: #16a34a; } .danger { background: #dc2626; }
        .wallet { display: flex; gap: 16px; align-items: center; }
        .mono { font-family: monospace; }
        .message { padding: 12px; border-radius: 6px; margin-bottom: 16px; }
        .message.success { background: #dcfce7; color: #166534; } .message.error { background: #fee2e2; color: #991b1b; }
        .hero { text-align: center; margin-bottom: 32px; }
        .hero h2 { font-size: 28px; margin-bottom: 8px; }
        .hero p { color: #4b5563; }
        .features { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 24px; }
        .features .card { margin-bottom: 0; }
        .features h3 { margin: 8px 0; }
        footer { text-align: center; color: #6b7280; font-size: 13px; padding: 24px; }
    </style>
</head>
<body>
    <header>
        <h1>restart</h1>
        <div id="wallet" class="wallet"></div>
    </header>
    <main>
        <section class="hero">
            <h2>Welcome to the Restart Self-Lock Platform</h2>
            <p>Decentralized self-locking built on the Sui blockchain</p>
        </section>
        <div id="lock"></div>
        <section class="features">
            <div class="card">
                <div>&#128274;</div>
                <h3>Secure locking</h3>
                <p class="hint">Funds are held by a smart contract with your own lock period and withdrawal rules</p>
            </div>
            <div class="card">
                <div>&#9889;</div>
                <h3>Fast transactions</h3>
                <p class="hint">Sui confirms transactions quickly with low fees</p>
            </div>
            <div class="card">
                <div>&#128737;</div>
                <h3>Flexible control</h3>
                <p class="hint">Emergency withdrawal and auto reinvest cover different needs</p>
            </div>
        </section>
        <div class="card">
            <h3>About __NETWORK__</h3>
            <p id="info" class="hint"></p>
        </div>
    </main>
    <footer>Restart - self-locking on Sui</footer>
    <script>
        const FIELDS = ['name', 'description', 'minLockPeriod', 'maxWithdrawalPerDay', 'withdrawalFeeRate'];

        function escapeHtml(value) {
            return String(value ?? '')
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/"/g, '&quot;')
                .replace(/'/g, '&#39;');
        }

        async function api(method, path, body) {
            const opts = { method, headers: {} };
            if (body !== undefined) {
                opts.headers['Content-Type'] = 'application/json';
                opts.body = JSON.stringify(body);
            }
            const res = await fetch(path, opts);
            return res.json();
        }

        function draftFromForm() {
            const draft = {};
            FIELDS.forEach(f => draft[f] = document.getElementById(f).value);
            draft.autoReinvest = document.getElementById('autoReinvest').checked;
            draft.emergencyWithdrawal = document.getElementById('emergencyWithdrawal').checked;
            return draft;
        }

        function renderWallet(w) {
            const el = document.getElementById('wallet');
            if (!w.connected) {
                el.innerHTML = `<button class="primary" ${w.connect_disabled ? 'disabled' : ''} onclick="walletAction('connect')">${escapeHtml(w.connect_label)}</button>`;
                return;
            }
            el.innerHTML = `
                <div><div class="hint">Address</div><div class="mono">${escapeHtml(w.short_address)}</div></div>
                <div><div class="hint">Balance</div><div><b>${escapeHtml(w.balance_formatted)}</b></div></div>
                <button class="refresh" ${w.refresh_disabled ? 'disabled' : ''} onclick="walletAction('refresh')">${escapeHtml(w.refresh_label)}</button>
                <button class="danger" onclick="walletAction('disconnect')">Disconnect</button>`;
        }

        function renderForm(v) {
            const el = document.getElementById('lock');
            if (!v.available) {
                el.innerHTML = `<div class="card notice">${escapeHtml(v.notice)}</div>`;
                return;
            }
            const d = v.draft;
            const h = v.hints;
            const msg = v.message
                ? `<div class="message ${escapeHtml(v.message.type)}">${escapeHtml(v.message.text)}</div>`
                : '';
            const feeHint = h.withdrawalFeeRate && h.feeAtDailyCap
                ? `${h.withdrawalFeeRate} (${h.feeAtDailyCap} on the daily cap)`
                : h.withdrawalFeeRate;
            el.innerHTML = `<div class="card">
                <h2>Create Self-Locked Object</h2>${msg}
                <label>Object name</label><input type="text" id="name" value="${escapeHtml(d.name)}">
                <label>Description</label><textarea id="description" rows="3">${escapeHtml(d.description)}</textarea>
                <label>Minimum lock period (seconds)</label><input type="number" min="1" id="minLockPeriod" value="${escapeHtml(d.minLockPeriod)}">
                <div class="hint">${escapeHtml(h.minLockPeriod)}</div>
                <label>Max daily withdrawal (MIST)</label><input type="number" min="0" id="maxWithdrawalPerDay" value="${escapeHtml(d.maxWithdrawalPerDay)}">
                <div class="hint">${escapeHtml(h.maxWithdrawalPerDay)}</div>
                <label>Withdrawal fee rate (bps)</label><input type="number" min="0" max="10000" id="withdrawalFeeRate" value="${escapeHtml(d.withdrawalFeeRate)}">
                <div class="hint">${escapeHtml(feeHint)}</div>
                <label><input type="checkbox" id="autoReinvest" ${d.autoReinvest ? 'checked' : ''}> Auto reinvest</label>
                <label><input type="checkbox" id="emergencyWithdrawal" ${d.emergencyWithdrawal ? 'checked' : ''}> Allow emergency withdrawal</label>
                <br><button class="primary" ${v.submit_disabled ? 'disabled' : ''} onclick="submitLock()">${escapeHtml(v.submit_label)}</button>
            </div>`;
        }

        async function refreshAll() {
            renderWallet(await api('GET', '/wallet'));
            renderForm(await api('GET', '/lock/form'));
        }

        async function walletAction(action) {
            const pending = api('POST', '/wallet/' + action);
            await refreshAll();
            await pending;
            await refreshAll();
        }

        async function submitLock() {
            const pending = api('POST', '/lock', draftFromForm());
            await refreshAll();
            await pending;
            await refreshAll();
        }

        api('GET', '/info').then(i => {
            document.getElementById('info').textContent = `Network: ${i.network_label} - Token: ${i.token} - ${i.environment}`;
        });
        refreshAll();
    </script>
</body>
</html>
"#;

/// Generate the front end page for the given network label
pub fn render_index(network_label: &str) -> String {
    INDEX_TEMPLATE.replace("__NETWORK__", network_label)
}
