//! Static stylesheet and script embedded in every viewer document.

pub(super) const STYLE: &str = r#"
    :root {
      --sidebar-w: 280px;
      --header-h: 52px;
      --bg: #0f172a;
      --surface: #1e293b;
      --surface2: #273549;
      --accent: #6366f1;
      --accent-light: #818cf8;
      --text: #f1f5f9;
      --text-muted: #94a3b8;
      --border: #334155;
    }
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    html, body {
      height: 100%;
      font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
      background: var(--bg);
      color: var(--text);
      overflow: hidden;
    }
    #topbar {
      position: fixed; top: 0; left: 0; right: 0;
      height: var(--header-h);
      display: flex; align-items: center; gap: 12px;
      padding: 0 16px;
      background: var(--surface);
      border-bottom: 1px solid var(--border);
      z-index: 200;
    }
    #menu-btn {
      width: 36px; height: 36px; flex-shrink: 0;
      display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 5px;
      background: var(--accent); border: none; border-radius: 8px; cursor: pointer;
    }
    #menu-btn span { display: block; width: 18px; height: 2px; background: #fff; border-radius: 2px; transition: transform 0.25s, opacity 0.25s; }
    #menu-btn.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    #menu-btn.open span:nth-child(2) { opacity: 0; }
    #menu-btn.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    #book-title { flex: 1; font-size: 15px; font-weight: 600; color: var(--text-muted); white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
    #pagination { display: flex; align-items: center; gap: 8px; }
    .pg-btn {
      width: 32px; height: 32px;
      display: flex; align-items: center; justify-content: center;
      background: var(--surface2); border: 1px solid var(--border); border-radius: 8px;
      color: var(--text); font-size: 16px; cursor: pointer; user-select: none;
    }
    .pg-btn:hover { background: var(--accent); border-color: var(--accent); }
    #pgNo {
      width: 52px; padding: 4px 6px; text-align: center;
      background: var(--surface2); border: 1px solid var(--border); border-radius: 8px;
      color: var(--text); font-size: 14px; font-weight: 600; outline: none;
    }
    #pgNo:focus { border-color: var(--accent); }
    #total-pages { font-size: 13px; color: var(--text-muted); white-space: nowrap; }
    #sidebar {
      position: fixed; top: var(--header-h); left: calc(-1 * var(--sidebar-w));
      width: var(--sidebar-w); height: calc(100% - var(--header-h));
      display: flex; flex-direction: column;
      background: var(--surface); border-right: 1px solid var(--border);
      transition: left 0.28s cubic-bezier(.4,0,.2,1);
      z-index: 150;
    }
    #sidebar.open { left: 0; }
    #sidebar-header { padding: 18px 20px 12px; border-bottom: 1px solid var(--border); }
    #sidebar-header h2 { font-size: 13px; letter-spacing: 0.08em; text-transform: uppercase; color: var(--accent-light); }
    #toc-list { list-style: none; overflow-y: auto; flex: 1; padding: 8px 0; }
    .toc-item a {
      display: flex; align-items: baseline; gap: 10px;
      padding: 9px 20px;
      color: var(--text-muted); text-decoration: none; font-size: 13.5px; line-height: 1.45;
      border-left: 3px solid transparent;
    }
    .toc-item a:hover { background: var(--surface2); color: var(--text); border-left-color: var(--accent); }
    .toc-item.active a { background: rgba(99,102,241,0.15); color: var(--accent-light); border-left-color: var(--accent); font-weight: 600; }
    .toc-num { min-width: 20px; flex-shrink: 0; font-size: 11px; font-weight: 700; color: var(--accent); }
    #overlay { display: none; position: fixed; inset: var(--header-h) 0 0 0; background: rgba(0,0,0,0.45); z-index: 100; }
    #overlay.show { display: block; }
    #content { position: fixed; top: var(--header-h); left: 0; right: 0; bottom: 0; }
    #viewerFrame { width: 100%; height: 100%; border: none; background: #fff; }
    #progress-bar { position: fixed; bottom: 0; left: 0; width: 0; height: 3px; background: var(--accent); transition: width 0.3s ease; z-index: 300; }
"#;

/// Navigation logic. Expects `fileNames` to be declared before it runs.
pub(super) const SCRIPT: &str = r#"
    var currentPage = fileNames.length > 0 ? 1 : 0;
    var frame = document.getElementById('viewerFrame');
    var pageInput = document.getElementById('pgNo');
    var sidebar = document.getElementById('sidebar');
    var menuButton = document.getElementById('menu-btn');
    var overlay = document.getElementById('overlay');
    var tocItems = document.querySelectorAll('.toc-item');

    function updateProgress() {
      var pct = fileNames.length > 0 ? (currentPage / fileNames.length) * 100 : 0;
      document.getElementById('progress-bar').style.width = pct + '%';
    }

    function markActive() {
      for (var i = 0; i < tocItems.length; i++) {
        var page = parseInt(tocItems[i].getAttribute('data-page'), 10);
        tocItems[i].classList.toggle('active', page === currentPage);
      }
    }

    function showPage(pageNo) {
      if (fileNames.length === 0) { return; }
      currentPage = Math.min(Math.max(pageNo, 1), fileNames.length);
      frame.setAttribute('src', fileNames[currentPage - 1]);
      pageInput.value = currentPage;
      markActive();
      updateProgress();
    }

    function openSidebar() {
      sidebar.classList.add('open');
      menuButton.classList.add('open');
      overlay.classList.add('show');
    }

    function closeSidebar() {
      sidebar.classList.remove('open');
      menuButton.classList.remove('open');
      overlay.classList.remove('show');
    }

    menuButton.addEventListener('click', function () {
      if (sidebar.classList.contains('open')) { closeSidebar(); } else { openSidebar(); }
    });
    overlay.addEventListener('click', closeSidebar);

    document.getElementById('prev').addEventListener('click', function () {
      if (currentPage > 1) { showPage(currentPage - 1); }
    });
    document.getElementById('next').addEventListener('click', function () {
      if (currentPage < fileNames.length) { showPage(currentPage + 1); }
    });

    pageInput.addEventListener('keyup', function (e) {
      if (e.key !== 'Enter') { return; }
      var val = parseInt(pageInput.value, 10);
      if (val >= 1 && val <= fileNames.length) {
        showPage(val);
      } else if (val > fileNames.length) {
        showPage(fileNames.length);
      }
    });

    for (var i = 0; i < tocItems.length; i++) {
      tocItems[i].querySelector('a').addEventListener('click', function (e) {
        var page = parseInt(this.parentNode.getAttribute('data-page'), 10);
        if (page >= 1) {
          e.preventDefault();
          showPage(page);
        } else {
          for (var j = 0; j < tocItems.length; j++) { tocItems[j].classList.remove('active'); }
          this.parentNode.classList.add('active');
        }
        if (window.innerWidth < 768) { closeSidebar(); }
      });
    }

    pageInput.value = currentPage;
    markActive();
    updateProgress();
"#;
