//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Loading overlay with the cumulative death count
//! - Daily lives-lost highlight
//! - Summary of deaths, cases and ICU patients
//! - Icon grid, one person per death since the previous report
//! - Fixed info box that hides at the bottom of the page
//!
//! `{{id}}` markers are filled from the rendered page model.

pub const TEMPLATE: &str = r#"
    <div id="overlay">
        <div class="overlay-content">
            <div class="overlay-label">Americans lost to COVID-19</div>
            <div class="overlay-value" id="death-total">{{death-total}}</div>
        </div>
    </div>

    <div class="container">
        <header>
            <h1>🇺🇸 COVID-19 in the United States</h1>
            <span class="report-date">Data as of <span id="assembled-date">{{assembled-date}}</span></span>
        </header>

        <section class="highlight">
            <div class="highlight-value" id="highlight-lives-lost">{{highlight-lives-lost}}</div>
            <div class="highlight-label">lives lost in the latest daily report</div>
        </section>

        <div class="grid">
            <div class="card">
                <div class="card-title">💀 Total Deaths</div>
                <div class="card-value" id="total-death-2">{{total-death-2}}</div>
            </div>
            <div class="card">
                <div class="card-title">🦠 Total Cases</div>
                <div class="card-value" id="total-cases">{{total-cases}}</div>
            </div>
            <div class="card">
                <div class="card-title">🏥 Currently in ICU</div>
                <div class="card-value" id="total-ICU">{{total-ICU}}</div>
            </div>
        </div>

        <section class="images">
            <p class="images-caption">Each figure below is one of the <span id="image-text">{{image-text}}</span> people who died on <span id="data-date">{{data-date}}</span>.</p>
            <div class="image-section" id="image-section">{{image-section}}</div>
        </section>

        <footer>Source: The COVID Tracking Project</footer>
    </div>

    <div class="text-box" id="text-box">
        Scroll to see every life lost in a single day.
    </div>
"#;
