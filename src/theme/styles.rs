//! Global CSS styles for Panorama.
//!
//! Panel backgrounds come from the configured palette and are set inline;
//! everything else lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LILAC */
  --lilac-50: #fdf2ff;
  --lilac-100: #f8e6ff;
  --lilac-200: #f0d4ff;
  --lilac-300: #ebbcf7;
  --lilac-400: #d4a5e8;
  --lilac-500: #c896d9;
  --plum-600: #855a9d;
  --plum-700: #633c7f;

  /* GLASS */
  --glass: rgba(255, 255, 255, 0.55);
  --glass-strong: rgba(255, 255, 255, 0.95);
  --glass-border: rgba(255, 255, 255, 0.6);
  --shadow-soft: 0 20px 40px rgba(235, 188, 247, 0.3);

  /* TEXT */
  --text-primary: #3b2450;
  --text-secondary: rgba(59, 36, 80, 0.7);

  --font-display: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --panel-slide: 0.8s cubic-bezier(0.65, 0, 0.35, 1);
  --content-fade: 0.6s ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-family: var(--font-body);
  color: var(--text-primary);
  cursor: none;
}

.app-root {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
}

/* === Custom Cursor === */
#custom-cursor {
  position: fixed;
  width: 20px;
  height: 20px;
  margin: -10px 0 0 -10px;
  border-radius: 50%;
  border: 2px solid var(--plum-600);
  background: rgba(235, 188, 247, 0.35);
  pointer-events: none;
  z-index: 9999;
  transition: transform 0.1s ease;
}

/* === Showcase === */
.showcase {
  position: fixed;
  inset: 0;
  outline: none;
  transition: background 0.8s ease;
}

.panel-container {
  display: flex;
  height: 100vh;
  transition: transform var(--panel-slide);
}

.panel {
  flex: 0 0 100vw;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: opacity 0.6s ease;
}

.panel .content {
  max-width: 960px;
  width: 80vw;
  padding: 3rem;
  border-radius: 24px;
  background: var(--glass);
  backdrop-filter: blur(20px);
  border: 1px solid var(--glass-border);
  box-shadow: var(--shadow-soft);
  transition: opacity var(--content-fade), transform var(--content-fade);
}

.panel-title {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 400;
  margin-bottom: 1.5rem;
}

.panel-lead {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.panel-link, .back-link {
  color: var(--plum-600);
  text-decoration: none;
  border-bottom: 1px solid currentColor;
  margin-right: 1.5rem;
}

.back-link {
  position: fixed;
  top: 1.5rem;
  left: 1.5rem;
  z-index: 10;
}

/* === Progress Dots === */
.progress-dots {
  position: fixed;
  right: 2rem;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  z-index: 20;
}

.progress-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: 1px solid var(--plum-600);
  background: transparent;
  cursor: none;
  transition: transform 0.3s ease, background 0.3s ease;
}

.progress-dot.active {
  background: var(--plum-600);
  transform: scale(1.3);
}

/* === Buttons === */
.btn-primary, .btn-ghost, .nav-btn, .btn-threshold, .close-btn {
  font-family: var(--font-body);
  cursor: none;
  transition: all 0.3s ease;
}

.btn-primary {
  padding: 0.75rem 1.75rem;
  border: none;
  border-radius: 999px;
  background: var(--plum-600);
  color: white;
}

.btn-primary:hover { background: var(--plum-700); }

.btn-ghost {
  padding: 0.6rem 1.4rem;
  border: 1px solid var(--plum-600);
  border-radius: 999px;
  background: transparent;
  color: var(--plum-600);
}

.btn-ghost:hover { background: rgba(133, 90, 157, 0.1); }

.nav-btn {
  padding: 0.5rem 1.25rem;
  border: none;
  border-bottom: 2px solid transparent;
  background: none;
  color: var(--text-secondary);
}

.nav-btn.active {
  color: var(--text-primary);
  border-bottom-color: var(--plum-600);
}

.btn-threshold {
  width: 180px;
  height: 280px;
  border: 2px solid var(--glass-border);
  border-radius: 90px 90px 8px 8px;
  background: var(--glass);
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: var(--text-primary);
}

.btn-threshold.mirror { border-radius: 50%; height: 220px; }
.btn-threshold:hover { transform: translateY(-6px); box-shadow: var(--shadow-soft); }

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2rem;
  height: 2rem;
  border: none;
  background: none;
  font-size: 1.5rem;
  color: var(--text-secondary);
}

/* === Route === */
.route-form {
  display: flex;
  gap: 1rem;
}

.route-form input {
  flex: 1;
  padding: 0.75rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--glass-border);
  background: var(--glass-strong);
  font-size: 1rem;
  color: var(--text-primary);
}

.route-page, .research, .intro {
  position: fixed;
  inset: 0;
  padding: 6rem 10vw;
  background: linear-gradient(135deg, var(--lilac-50) 0%, var(--lilac-200) 100%);
  overflow-y: auto;
}

/* === Wardrobe Grid === */
.wardrobe-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.wardrobe-item {
  position: relative;
  padding: 1.5rem;
  border-radius: 16px;
  background:
    radial-gradient(circle at var(--mouse-x, 50%) var(--mouse-y, 50%), rgba(235, 188, 247, 0.6), transparent 60%),
    var(--glass);
  transition: transform 0.3s ease;
}

.wardrobe-item:hover { transform: translateY(-4px); }

.threshold {
  display: flex;
  justify-content: center;
  gap: 4rem;
}

/* === Skills === */
.skill { margin-bottom: 1rem; }
.skill-label { display: block; margin-bottom: 0.35rem; }

.progress-bar {
  height: 8px;
  border-radius: 4px;
  background: rgba(255, 255, 255, 0.5);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--lilac-300), var(--plum-600));
  transition: width 1.2s ease;
}

/* === Gallery / Experiments / Contact === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}

.gallery-item {
  aspect-ratio: 4 / 3;
  display: flex;
  align-items: flex-end;
  padding: 1rem;
  border-radius: 12px;
  background: linear-gradient(135deg, var(--lilac-200), var(--lilac-500));
  transition: transform 0.3s ease;
}

.gallery-item:hover { transform: scale(1.03); }

.experiments, .contact-links, .journey-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.contact-link {
  color: var(--plum-600);
  text-decoration: none;
  font-size: 1.25rem;
}

/* === Dialogs === */
.dialog-backdrop {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(59, 36, 80, 0.25);
  z-index: 1000;
}

.message-dialog {
  max-width: 420px;
  padding: 2rem;
  border-radius: 20px;
  background: var(--glass-strong);
  box-shadow: var(--shadow-soft);
  text-align: center;
}

.message-dialog p { margin-bottom: 0.75rem; }

.info-bubble {
  position: fixed;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  max-width: 400px;
  padding: 2rem;
  border-radius: 20px;
  background: var(--glass-strong);
  backdrop-filter: blur(20px);
  box-shadow: var(--shadow-soft);
  text-align: center;
  z-index: 1000;
  animation: bubbleIn 0.5s ease-out;
}

.info-bubble.closing { animation: bubbleOut 0.5s ease-out forwards; }

/* === Intro Narrative === */
.stage {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  opacity: 0;
  pointer-events: none;
  transition: opacity 1.2s ease;
}

.stage.active { opacity: 1; pointer-events: auto; }

.question {
  font-family: var(--font-display);
  font-size: 2.5rem;
  font-weight: 400;
  max-width: 720px;
  text-align: center;
  animation: fadeInUp 1s ease-out 0.5s both;
}

.silhouette, .person-overlay, .person-detailed {
  width: 120px;
  height: 320px;
  border-radius: 60px 60px 20px 20px;
  background: linear-gradient(180deg, var(--plum-600), var(--plum-700));
}

.environment-container, .garment-container {
  perspective: 1000px;
  transform-style: preserve-3d;
  transition: transform 0.6s ease;
}

.environment-scene {
  position: relative;
  width: 600px;
  height: 400px;
  transform-style: preserve-3d;
}

.building, .tree {
  position: absolute;
  bottom: 0;
  transition: all 0.8s ease;
}

.building { width: 60px; height: 200px; background: var(--lilac-400); }
.building:nth-child(2n) { height: 260px; left: 30%; }
.tree { width: 40px; height: 90px; border-radius: 50% 50% 4px 4px; background: var(--lilac-300); left: 60%; }

.person-overlay {
  position: absolute;
  top: 50%;
  left: 50%;
}

.garment-layer {
  position: absolute;
  inset: 20% 10%;
  border-radius: 20px;
  background: rgba(235, 188, 247, 0.6);
}

.garment-layer.inner { inset: 30% 20%; background: rgba(255, 255, 255, 0.4); }

.stage-caption { margin-top: 2rem; color: var(--text-secondary); }

/* === Research === */
.research-nav { display: flex; gap: 0.5rem; margin-bottom: 2rem; }

.question-card, .topic, .policy-item {
  padding: 1.5rem;
  margin-bottom: 1rem;
  border-radius: 16px;
  background: var(--glass);
  transition: all 0.3s ease;
}

.question-card.expanded { background: var(--glass-strong); box-shadow: var(--shadow-soft); }
.question-number { font-family: var(--font-display); font-size: 1.5rem; margin-right: 1rem; }
.topic.highlighted, .policy-item.highlighted { outline: 2px solid var(--plum-600); }

.detail-panel {
  position: fixed;
  top: 0;
  right: 0;
  width: 420px;
  height: 100vh;
  padding: 3rem 2rem;
  background: var(--glass-strong);
  box-shadow: var(--shadow-soft);
  transform: translateX(100%);
  transition: transform 0.4s ease;
  z-index: 50;
}

.detail-panel.active { transform: translateX(0); }
.detail-body h3 { margin: 1.5rem 0 0.5rem; }
.detail-body li { margin-left: 1.25rem; margin-bottom: 0.35rem; }

/* === Floating Keywords === */
.wardrobe-container {
  position: fixed;
  inset: 0;
  background: linear-gradient(135deg, var(--lilac-50), var(--lilac-300));
}

.keyword {
  position: absolute;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  background: var(--glass);
  font-family: var(--font-display);
  font-size: 1.5rem;
  white-space: nowrap;
  transition: left 3s ease, top 3s ease, transform 0.3s ease;
}

.keyword.active { background: var(--glass-strong); box-shadow: var(--shadow-soft); z-index: 5; }

.ripple {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 100px;
  height: 100px;
  margin: -50px 0 0 -50px;
  border: 2px solid rgba(235, 188, 247, 0.6);
  border-radius: 50%;
  pointer-events: none;
  animation: ripple 1s ease-out forwards;
}

/* === Keyframes === */
@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes ripple {
  from { transform: scale(0.2); opacity: 1; }
  to { transform: scale(2); opacity: 0; }
}

@keyframes bubbleIn {
  from { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
  to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
}

@keyframes bubbleOut {
  from { opacity: 1; transform: translate(-50%, -50%) scale(1); }
  to { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
}
"#;
