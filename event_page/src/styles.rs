//! CSS for the event page.
//!
//! One stylesheet shared by the static document and the browser build.
//! Extend it by appending rules:
//!
//! ```rust
//! use event_page::styles::PAGE_CSS;
//!
//! let css = format!("{PAGE_CSS}\n.hero {{ min-height: 80vh; }}");
//! assert!(css.contains("--brand"));
//! ```

/// Complete stylesheet: warm neutrals, serif headings, brand red accents.
pub const PAGE_CSS: &str = r#"
:root {
    --brand: #B91118;
    --brand-dark: #9a0e14;
    --brand-soft: rgba(185, 17, 24, 0.2);
    --ink: #2a2520;
    --ink-muted: #4a4540;
    --ink-faint: #5a5550;
    --paper: #ffffff;
    --paper-warm: #fafaf9;
    --paper-card: #f5f3f0;
    --rule: #c4c0b8;
    --serif: Georgia, "Times New Roman", serif;
    --sans: system-ui, -apple-system, "Segoe UI", sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--sans);
    color: var(--ink);
    background: var(--paper);
    line-height: 1.5;
}

img { display: block; max-width: 100%; }

a { color: inherit; }

.container { max-width: 64rem; margin: 0 auto; }

.section { padding: 3rem 1.5rem; }

@media (min-width: 768px) {
    .section { padding: 4rem 1.5rem; }
}

.section-header { text-align: center; margin-bottom: 2.5rem; }

.section-label {
    color: var(--brand);
    font-size: 0.875rem;
    font-weight: 600;
    letter-spacing: 0.2em;
    margin: 0 0 0.75rem;
}

.section-label.boxed {
    display: inline-block;
    padding: 0.375rem 1rem;
    border: 2px solid rgba(185, 17, 24, 0.6);
    border-radius: 0.5rem;
    color: var(--ink);
    font-size: 0.75rem;
    margin-bottom: 1.5rem;
}

.section-title {
    font-family: var(--serif);
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    line-height: 1.15;
    margin: 0 0 1rem;
}

.section-subtitle {
    color: var(--ink-muted);
    font-size: 1.125rem;
    max-width: 42rem;
    margin: 0 auto;
}

.accent { color: var(--brand); }

.glyph { width: 1rem; height: 1rem; flex-shrink: 0; }
.glyph-large { width: 6rem; height: 6rem; color: var(--rule); }

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: 0;
    border-radius: 0.5rem;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: background-color 200ms, transform 200ms;
}

.btn-primary { background: var(--brand); color: #fff; }
.btn-primary:hover { background: var(--brand-dark); }
.btn-large { padding: 1rem 2.5rem; font-size: 1.125rem; }
.btn-block { width: 100%; padding: 1rem 1.5rem; font-size: 1.125rem; }

/* Hero */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    color: #fff;
    text-align: center;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
}

.hero-curtain {
    position: absolute;
    inset: 0;
    background:
        linear-gradient(90deg, rgba(30, 15, 10, 0.9) 0%, transparent 20%, transparent 80%, rgba(30, 15, 10, 0.9) 100%),
        linear-gradient(180deg, rgba(20, 10, 8, 0.6) 0%, transparent 30%, transparent 70%, rgba(10, 5, 5, 0.8) 100%),
        rgba(0, 0, 0, 0.4);
}

.hero-content {
    position: relative;
    z-index: 1;
    width: 100%;
    max-width: 48rem;
    padding: 6rem 1.5rem;
}

.hero-tag {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.375rem 1rem;
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.6);
    border: 1px solid rgba(185, 17, 24, 0.4);
    margin-bottom: 2rem;
    font-size: 0.875rem;
}

.hero-tag-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--brand); }

.hero-headline {
    font-family: var(--serif);
    font-size: clamp(3rem, 8vw, 4.5rem);
    line-height: 1.1;
    margin: 0 0 1rem;
    text-shadow: 0 0 1px rgba(0, 0, 0, 0.9), 0 0 3px rgba(0, 0, 0, 0.8), 0 2px 8px rgba(0, 0, 0, 0.6);
}

.hero-subheadline { font-size: 1.25rem; font-weight: 300; color: #e2e8f0; margin: 0 0 1.5rem; }
.hero-description { color: #94a3b8; max-width: 36rem; margin: 0 auto 2.5rem; }

.hero-event {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem 2.5rem;
    color: #94a3b8;
    font-size: 0.875rem;
    margin-bottom: 2.5rem;
}

.event-detail { display: inline-flex; align-items: center; gap: 0.5rem; }
.event-detail .glyph { color: rgba(185, 17, 24, 0.8); }

.hero-footer { margin-top: 3rem; color: #64748b; font-size: 0.875rem; }

.hero-form {
    margin: 2.5rem auto 0;
    max-width: 28rem;
    padding: 1.5rem;
    border-radius: 1rem;
    background: rgba(245, 243, 240, 0.95);
    color: var(--ink);
    text-align: left;
}

/* Pillars */

.pillars { background: var(--paper-warm); }

.pillar-list { display: grid; gap: 1.5rem; max-width: 56rem; margin: 0 auto; }

.pillar-card {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    padding: 2rem;
    border-radius: 1rem;
    background: var(--paper);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
}

@media (min-width: 640px) {
    .pillar-card { flex-direction: row; gap: 2.5rem; }
}

.pillar-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    flex-shrink: 0;
    border-radius: 50%;
    background: var(--brand-soft);
    color: var(--brand);
}

.pillar-title { font-family: var(--serif); font-size: 1.5rem; margin: 0 0 0.5rem; }
.pillar-tagline { color: var(--brand); font-weight: 500; margin: 0 0 0.75rem; }
.pillar-description { color: var(--ink-muted); margin: 0; }

/* Host */

.host-card {
    display: flex;
    flex-direction: column;
    overflow: hidden;
    border-radius: 1rem;
    border: 1px solid #f0eeeb;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
}

@media (min-width: 768px) {
    .host-card { flex-direction: row; }
    .host-portrait { width: 40%; }
    .host-body { width: 60%; }
}

.host-portrait { min-height: 300px; background: var(--paper-card); }
.host-image { width: 100%; height: 100%; object-fit: cover; object-position: top; }
.host-image.placeholder { display: flex; align-items: center; justify-content: center; min-height: 300px; }

.host-body { padding: 2.5rem; display: flex; flex-direction: column; justify-content: center; }
.host-role { color: var(--brand); font-size: 0.75rem; font-weight: 700; letter-spacing: 0.2em; margin: 0 0 0.5rem; }
.host-name { font-family: var(--serif); font-size: 2.25rem; margin: 0 0 1rem; }
.host-description { color: var(--ink-muted); margin: 0 0 2rem; }

.host-stats {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
    margin-bottom: 2rem;
}

@media (min-width: 1024px) {
    .host-stats { grid-template-columns: repeat(4, 1fr); }
}

.host-stat {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 2px solid rgba(185, 17, 24, 0.3);
    text-align: center;
}

.host-stat-icon { color: var(--brand); margin-bottom: 0.5rem; }
.host-stat-value { font-weight: 700; font-size: 1.125rem; }
.host-stat-label { font-size: 0.875rem; color: var(--ink-faint); }

.host-links { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; font-size: 0.875rem; }
.host-follow-label { color: var(--ink-faint); }
.host-link a { font-weight: 500; }
.host-link a:hover { color: var(--brand); }
.link-separator { margin: 0 0.5rem; color: var(--rule); }

/* Deep dive */

.feature-list { display: grid; gap: 1.5rem; }

.feature-card {
    display: flex;
    flex-direction: column;
    overflow: hidden;
    border-radius: 1rem;
    background: var(--paper-card);
}

@media (min-width: 768px) {
    .feature-card.image-left { flex-direction: row; }
    .feature-card.image-right { flex-direction: row-reverse; }
    .feature-media, .feature-text { width: 50%; }
}

.feature-media { position: relative; min-height: 240px; }
.feature-image { width: 100%; height: 100%; min-height: 240px; object-fit: cover; }

.feature-stat {
    position: absolute;
    left: 1rem;
    bottom: 1rem;
    max-width: 200px;
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    background: rgba(0, 0, 0, 0.7);
    color: #fff;
}

.feature-stat-value { font-size: 1.5rem; font-weight: 700; }
.feature-stat-label { font-size: 0.875rem; opacity: 0.9; }

.feature-text { position: relative; padding: 2.5rem; display: flex; flex-direction: column; justify-content: center; }

.feature-number {
    position: absolute;
    top: 2rem;
    right: 2rem;
    font-size: 6rem;
    font-weight: 700;
    line-height: 1;
    color: rgba(185, 17, 24, 0.15);
    user-select: none;
}

.feature-rule { width: 3rem; height: 2px; background: rgba(185, 17, 24, 0.7); margin-bottom: 1rem; }
.feature-title { font-family: var(--serif); font-size: 1.5rem; margin: 0 0 0.75rem; }
.feature-description { color: var(--ink-faint); margin: 0; }

.section-cta { text-align: center; margin-top: 3rem; }

/* Register */

.register-grid { display: grid; gap: 3rem; align-items: start; }

@media (min-width: 768px) {
    .register-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
}

.register-description { color: var(--ink-muted); font-size: 1.125rem; margin: 0 0 2rem; }

.benefit-list { list-style: none; padding: 0; margin: 0 0 2.5rem; display: grid; gap: 1rem; }
.benefit { display: flex; align-items: flex-start; gap: 0.75rem; }
.benefit-dot { width: 0.5rem; height: 0.5rem; margin-top: 0.5rem; border-radius: 50%; background: var(--brand); flex-shrink: 0; }

.event-card {
    display: inline-flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1rem;
    border-radius: 0.75rem;
    background: var(--paper-card);
}

.event-card .glyph { width: 1.25rem; height: 1.25rem; color: var(--brand); }
.event-date { font-weight: 700; }
.event-time { font-size: 0.875rem; color: var(--ink-faint); }

.register-form-panel { background: var(--paper-card); border-radius: 1rem; padding: 2rem; }

/* Form */

.registration-form { display: grid; gap: 1.25rem; }
.form-title { font-family: var(--serif); font-size: 1.5rem; text-align: center; margin: 0 0 1rem; }

.field-label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.375rem; }

.field-input {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid transparent;
    border-radius: 0.5rem;
    background: rgba(255, 255, 255, 0.8);
    color: var(--ink);
    font: inherit;
}

.field-input:focus { outline: none; box-shadow: 0 0 0 2px rgba(185, 17, 24, 0.5); }
.field-input.field-error { border-color: var(--brand); background: #fff5f5; }

select.field-input { appearance: none; cursor: pointer; padding-right: 2.5rem; }

.form-status { min-height: 1.25rem; margin: 0; font-size: 0.875rem; text-align: center; }
.form-status.error { color: var(--brand); }
.form-status.success { color: #2f7d32; font-weight: 600; }

.form-note {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    margin: 0;
    font-size: 0.875rem;
    color: var(--ink-faint);
}

.registration-form.compact { gap: 0.75rem; }

/* Footer */

.footer { background: #000; color: #cbd5e1; text-align: center; padding: 2.5rem 1.5rem; }
.footer-inner { max-width: 42rem; margin: 0 auto; }
.footer-logo { display: flex; justify-content: center; margin-bottom: 1.5rem; }
.footer-logo img { height: 3rem; width: auto; object-fit: contain; }
.footer-tagline { margin: 0 0 2rem; }
.footer-rule { width: 5rem; height: 2px; background: var(--brand); margin: 0 auto 2rem; }
.footer-copyright { color: #64748b; font-size: 0.875rem; margin: 0; }

@media (prefers-reduced-motion: reduce) {
    [data-reveal-slot] { transition: none !important; }
}
"#;
