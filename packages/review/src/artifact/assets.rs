//! Static style sheet and viewer script embedded in every artifact.

pub(super) const STYLE: &str = r#"body { font-family: '微軟正黑體', 'Microsoft JhengHei', sans-serif; margin: 20px; }
table { border-collapse: collapse; width: 100%; table-layout: fixed; }
th, td { border: 1px solid #aaa; padding: 8px; text-align: left; vertical-align: top; word-break: break-word; }
thead th { background: #eee; position: sticky; top: 0; z-index: 1; }
th.clause { width: 45%; }
th.note { width: 20%; }
tbody tr:nth-child(even) { background-color: #f9f9f9; }
tbody tr:hover { background-color: #eef; }
textarea { width: 100%; height: 80px; padding: 4px; box-sizing: border-box; }
select:disabled, textarea:disabled { background-color: #f5f5f5; color: #333; }
.button { padding: 10px 15px; margin: 10px; background: #4CAF50; color: white; border: none; cursor: pointer; }
"#;

/// Viewer state machine.
///
/// `locked` (initial) --update--> `editing` --confirm--> `confirmed`.
/// `update` re-opens a confirmed review and `confirm` is also accepted from
/// `locked`; other transitions are ignored. `download` is only honoured in
/// `confirmed`. State lives in one object per document.
pub(super) const SCRIPT: &str = r#"(() => {
  'use strict';

  const TRANSITIONS = {
    update: { from: ['locked', 'confirmed'], to: 'editing' },
    confirm: { from: ['locked', 'editing'], to: 'confirmed' },
  };

  function createReview(doc) {
    const review = { state: 'locked' };
    const selects = () => doc.querySelectorAll('select[data-selected]');
    const notes = () => doc.querySelectorAll('textarea[data-content]');

    const setDisabled = (disabled) => {
      selects().forEach((el) => { el.disabled = disabled; });
      notes().forEach((el) => { el.disabled = disabled; });
    };

    const transition = (action) => {
      const rule = TRANSITIONS[action];
      if (!rule.from.includes(review.state)) {
        return false;
      }
      review.state = rule.to;
      return true;
    };

    review.restore = () => {
      selects().forEach((el) => { el.value = el.getAttribute('data-selected'); });
      notes().forEach((el) => { el.value = el.getAttribute('data-content'); });
    };

    review.update = () => {
      if (transition('update')) {
        setDisabled(false);
      }
    };

    review.confirm = () => {
      if (!transition('confirm')) {
        return;
      }
      selects().forEach((el) => { el.setAttribute('data-selected', el.value); });
      notes().forEach((el) => { el.setAttribute('data-content', el.value); });
      setDisabled(true);
    };

    review.download = () => {
      if (review.state !== 'confirmed') {
        alert('請先完成更新');
        return;
      }
      const suggested = doc.body.getAttribute('data-export-name');
      const fileName = prompt('請輸入儲存檔名：', suggested) || suggested;
      const blob = new Blob(['<!DOCTYPE html>\n' + doc.documentElement.outerHTML], { type: 'text/html' });
      const a = doc.createElement('a');
      a.href = URL.createObjectURL(blob);
      a.download = fileName;
      doc.body.appendChild(a);
      a.click();
      doc.body.removeChild(a);
      URL.revokeObjectURL(a.href);
    };

    return review;
  }

  document.addEventListener('DOMContentLoaded', () => {
    const review = createReview(document);
    review.restore();
    document.querySelectorAll('button[data-action]').forEach((button) => {
      button.addEventListener('click', () => review[button.dataset.action]());
    });
  });
})();
"#;
