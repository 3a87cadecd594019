//! Dashboard CSS styles
//!
//! Uses CSS custom properties (variables) for theming. The overlay fade
//! animation is generated separately, see `fader::fade_animation_css`.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --red: #f85149;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

/* Loading overlay */
#overlay {
    position: fixed;
    inset: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #000;
}

.overlay-content { text-align: center; }
.overlay-label { font-size: 14px; color: var(--text-dim); text-transform: uppercase; letter-spacing: 2px; }
.overlay-value { font-size: 64px; font-weight: 700; color: var(--red); margin-top: 12px; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.report-date { font-size: 12px; color: var(--text-dim); }

/* Highlight */
.highlight { text-align: center; margin: 32px 0; }
.highlight-value { font-size: 56px; font-weight: 700; color: var(--red); }
.highlight-label { color: var(--text-dim); }

/* Summary cards */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 16px;
}

.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-title { font-size: 14px; color: var(--text-dim); }
.card-value { font-size: 32px; font-weight: 700; margin-top: 8px; }

/* Icon grid */
.images { margin-top: 32px; }
.images-caption { margin-bottom: 16px; color: var(--text-dim); }

.image-section {
    display: flex;
    flex-wrap: wrap;
    gap: 2px;
}

.image-section div {
    width: 24px;
    height: 24px;
    line-height: 24px;
    text-align: center;
    font-size: 16px;
    border-radius: 4px;
}

footer { margin: 32px 0 80px; font-size: 12px; color: var(--text-dim); }

/* Fixed info box */
.text-box {
    position: fixed;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    padding: 12px 20px;
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 13px;
}

@media (max-width: 600px) {
    .grid { grid-template-columns: 1fr; }
    header { flex-direction: column; gap: 12px; }
    .overlay-value { font-size: 40px; }
}
";
