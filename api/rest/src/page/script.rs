use maud::{html, Markup, PreEscaped};

/// Re-renders the project grid once input has been idle for the configured
/// debounce; every keystroke clears the pending timer.
const PROJECT_SEARCH: &str = r#"
(function () {
  var form = document.getElementById('project-filter');
  if (!form) return;
  var results = document.getElementById('project-results');
  var delay = Number(form.dataset.debounceMs) || 300;
  var timer = null;
  function refresh() {
    var params = new URLSearchParams(new FormData(form)).toString();
    fetch('/fragments/projects?' + params)
      .then(function (res) { return res.text(); })
      .then(function (html) {
        results.innerHTML = html;
        history.replaceState(null, '', '/?' + params + '#projects');
      })
      .catch(function () {});
  }
  function schedule() {
    clearTimeout(timer);
    timer = setTimeout(refresh, delay);
  }
  form.addEventListener('input', schedule);
  form.addEventListener('change', schedule);
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    clearTimeout(timer);
    refresh();
  });
})();
"#;

/// Fire-and-forget web-vital beacons.
const WEB_VITALS: &str = r#"
(function () {
  if (!('PerformanceObserver' in window)) return;
  var endpoint = '/api/rest/analytics/web-vitals';
  var thresholds = {
    CLS: [0.1, 0.25], FCP: [1800, 3000], FID: [100, 300],
    INP: [200, 500], LCP: [2500, 4000], TTFB: [800, 1800]
  };
  var pageId = 'v1-' + Date.now() + '-' + Math.floor(Math.random() * 1e12);
  function rating(name, value) {
    var t = thresholds[name];
    return value <= t[0] ? 'good' : value <= t[1] ? 'needs-improvement' : 'poor';
  }
  function report(name, value) {
    var body = JSON.stringify({ name: name, value: value, rating: rating(name, value), id: pageId + '-' + name });
    if (navigator.sendBeacon) {
      navigator.sendBeacon(endpoint, body);
    } else {
      fetch(endpoint, { method: 'POST', body: body, keepalive: true }).catch(function () {});
    }
  }
  function observe(type, onEntry) {
    try {
      new PerformanceObserver(function (list) { list.getEntries().forEach(onEntry); })
        .observe({ type: type, buffered: true });
    } catch (e) {}
  }
  var nav = performance.getEntriesByType('navigation')[0];
  if (nav) report('TTFB', nav.responseStart);
  observe('paint', function (e) { if (e.name === 'first-contentful-paint') report('FCP', e.startTime); });
  observe('first-input', function (e) { report('FID', e.processingStart - e.startTime); });
  var lcp = 0;
  observe('largest-contentful-paint', function (e) { lcp = e.startTime; });
  var cls = 0;
  observe('layout-shift', function (e) { if (!e.hadRecentInput) cls += e.value; });
  addEventListener('visibilitychange', function () {
    if (document.visibilityState !== 'hidden') return;
    if (lcp) report('LCP', lcp);
    report('CLS', cls);
  }, { once: true });
})();
"#;

pub fn project_search() -> Markup {
    html! { script { (PreEscaped(PROJECT_SEARCH)) } }
}

pub fn web_vitals() -> Markup {
    html! { script { (PreEscaped(WEB_VITALS)) } }
}
