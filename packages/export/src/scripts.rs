/// Scroll-animation runtime shipped with every export. Elements carrying an
/// `animate-*` class gain the `visible` class when at least 10% of them
/// enters the viewport, and lose it again when they leave.
pub const ANIMATIONS_JS: &str = r#"document.addEventListener('DOMContentLoaded', function () {
  var animated = document.querySelectorAll('[class*="animate-"]');

  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
      } else {
        entry.target.classList.remove('visible');
      }
    });
  }, { threshold: 0.1 });

  animated.forEach(function (el) {
    observer.observe(el);
  });
});
"#;
