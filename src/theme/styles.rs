//! Global CSS styles for TinyGames.
//!
//! Dark arcade look: two alternating section colors, horizontal card rows
//! and a gold accent for premium content.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #14121f;
  --bg-raised: #1f1c30;
  --box-1: #2b2450;
  --box-2: #1d3a4a;
  --accent: #7b5cff;
  --accent-glow: rgba(123, 92, 255, 0.35);
  --premium: #f2c14e;
  --valid: #3ecf8e;
  --error: #ff4d6d;
  --text: #f4f4f8;
  --text-muted: rgba(244, 244, 248, 0.6);

  --card-width: 196px;
  --card-gap: 22px;
  --radius: 12px;
  --header-height: 64px;
  --font: 'Poppins', 'Segoe UI', sans-serif;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font);
}

a { color: inherit; }

.page { min-height: 100vh; }

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 20;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 20px;
  background: var(--bg-raised);
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
}

.header__logo img { height: 40px; }

.header__hamburger {
  display: flex;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.header__hamburger-line {
  width: 26px;
  height: 3px;
  border-radius: 2px;
  background: var(--text);
}

.header__avatar {
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 2px solid var(--accent);
  background: var(--box-1);
  cursor: pointer;
}

/* === Menus === */
.side-menu {
  position: fixed;
  top: var(--header-height);
  left: 0;
  bottom: 0;
  width: 260px;
  z-index: 15;
  padding: 24px 16px;
  background: var(--bg-raised);
  box-shadow: 4px 0 12px rgba(0, 0, 0, 0.5);
}

.side-menu__list {
  list-style: none;
  margin: 0;
  padding: 0;
}

.side-menu__link,
.user-menu__link {
  display: block;
  padding: 10px 12px;
  border-radius: 8px;
  text-decoration: none;
}

.side-menu__link:hover,
.user-menu__link:hover { background: var(--accent-glow); }

.user-menu {
  position: absolute;
  top: var(--header-height);
  right: 16px;
  z-index: 15;
  min-width: 180px;
  padding: 8px;
  border-radius: var(--radius);
  background: var(--bg-raised);
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.5);
}

[hidden] { display: none !important; }

/* === Home sections === */
.content-container {
  display: flex;
  flex-direction: column;
  gap: 28px;
  padding: 28px 32px;
}

.content-box {
  position: relative;
  padding: 18px 20px 24px;
  border-radius: var(--radius);
}

.box-color-1 { background: var(--box-1); }
.box-color-2 { background: var(--box-2); }

.content-box--premium { border: 2px solid var(--premium); }

.content-box__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 14px;
}

.content-box__title {
  display: flex;
  align-items: center;
  gap: 8px;
  margin: 0;
  font-size: 1.3rem;
}

.title-icon { height: 24px; }

.content-box__see-all {
  color: var(--text-muted);
  font-size: 0.9rem;
  text-decoration: none;
}

.cards-container {
  display: flex;
  gap: var(--card-gap);
  overflow-x: auto;
  scroll-behavior: smooth;
  scrollbar-width: none;
}

.cards-container::-webkit-scrollbar { display: none; }

.scroll-arrow {
  display: none;
  position: absolute;
  top: 50%;
  width: 40px;
  height: 40px;
  border: none;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.6);
  color: var(--text);
  font-size: 1.6rem;
  cursor: pointer;
}

.is-scrollable .scroll-arrow { display: block; }
.scroll-arrow--left { left: 6px; }
.scroll-arrow--right { right: 6px; }

/* === Cards === */
.game-card {
  position: relative;
  flex: 0 0 var(--card-width);
  display: flex;
  flex-direction: column;
  gap: 8px;
  padding: 10px;
  border-radius: var(--radius);
  background: var(--bg-raised);
}

.game-card--premium { box-shadow: 0 0 0 2px var(--premium); }

.game-card__image {
  width: 100%;
  height: 130px;
  object-fit: cover;
  border-radius: 8px;
}

.game-card__title {
  margin: 0;
  font-size: 0.95rem;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.game-card__premium-badge {
  position: absolute;
  top: 16px;
  left: 16px;
}

.game-card__premium-badge img { height: 26px; }

.game-card__button {
  padding: 6px 0;
  border-radius: 8px;
  background: var(--accent);
  text-align: center;
  text-decoration: none;
  font-weight: 600;
}

/* === Buttons === */
.btn-primary {
  padding: 10px 22px;
  border-radius: 8px;
  border: none;
  font: inherit;
  cursor: pointer;
  text-decoration: none;
}

.btn-primary { background: var(--accent); color: var(--text); }
.btn-primary:disabled { opacity: 0.5; cursor: not-allowed; }

/* === Forms === */
.login-page,
.register-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 40px 16px;
}

.login-box {
  width: min(420px, 100%);
  padding: 32px;
  border-radius: var(--radius);
  background: var(--bg-raised);
}

.login-form,
.register-form {
  display: flex;
  flex-direction: column;
  gap: 16px;
  width: min(420px, 100%);
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.input-label { font-size: 0.9rem; color: var(--text-muted); }

.form-field input {
  padding: 10px 12px;
  border-radius: 8px;
  border: 2px solid transparent;
  background: var(--bg);
  color: var(--text);
  font: inherit;
  transition: border-color 0.2s;
}

.form-field input.valid { border-color: var(--valid); }
.form-field input.error {
  border-color: var(--error);
  animation: shake 0.4s;
}

.password-wrapper { position: relative; }
.password-wrapper input { width: 100%; padding-right: 44px; }

.toggle-password,
.toggle-password-repeat {
  position: absolute;
  top: 50%;
  right: 10px;
  transform: translateY(-50%);
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}

.captcha-container {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 12px;
  border-radius: 8px;
  border: 2px solid transparent;
  background: var(--bg-raised);
}

.captcha-container.error {
  border-color: var(--error);
  animation: shake 0.4s;
}

@keyframes shake {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-4px); }
  75% { transform: translateX(4px); }
}

/* === Loading screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: none;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 16px;
  background: rgba(10, 8, 20, 0.92);
}

.loading-screen.active { display: flex; }

.loading-spinner {
  width: 56px;
  height: 56px;
  border: 5px solid var(--accent-glow);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.loading-text { color: var(--text-muted); }

/* === Game page === */
.game-page {
  display: flex;
  flex-direction: column;
  gap: 28px;
  padding: 28px 32px;
}

.game-hero__frame { position: relative; }
.game-hero__frame img { width: 100%; border-radius: var(--radius); }

.game-hero__play {
  position: absolute;
  left: 50%;
  bottom: 24px;
  transform: translateX(-50%);
  padding: 12px 36px;
  border-radius: 999px;
  background: var(--accent);
  text-decoration: none;
  font-weight: 700;
}

.game-actions {
  display: flex;
  gap: 12px;
}

.game-actions__button {
  padding: 8px 18px;
  border-radius: 8px;
  border: 1px solid var(--accent);
  background: transparent;
  color: var(--text);
  font: inherit;
  cursor: pointer;
}

.share { position: relative; }

.share-menu {
  position: absolute;
  top: calc(100% + 6px);
  left: 0;
  z-index: 10;
  display: flex;
  flex-direction: column;
  min-width: 160px;
  padding: 6px;
  border-radius: var(--radius);
  background: var(--bg-raised);
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.5);
}

.share-menu__link {
  padding: 8px 10px;
  border-radius: 6px;
  text-decoration: none;
}

.share-menu__link:hover { background: var(--accent-glow); }

.game-section {
  padding: 20px;
  border-radius: var(--radius);
  background: var(--bg-raised);
}

.game-section__empty { color: var(--text-muted); }

/* === Coming soon === */
.coming-soon {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 16px;
  padding: 80px 16px;
  text-align: center;
}
"#;
