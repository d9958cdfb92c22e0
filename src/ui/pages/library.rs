//! Library page - browse video jobs and start processing.

use dioxus::prelude::*;

use crate::ui::components::Shell;

/// Client-side JavaScript for the Library page.
const LIBRARY_SCRIPT: &str = r#"
async function loadJobs() {
    const section = document.querySelector('#jobs');
    try {
        const res = await fetch('/api/v1/jobs').then(r => r.json());
        const jobs = res.jobs || [];

        if (!jobs.length) {
            section.innerHTML = '<div class="card">No videos yet. Upload one to get started.</div>';
            return;
        }

        section.innerHTML = '<div class="card-grid">' + jobs.map(job => {
            const created = new Date(job.created_at).toISOString().slice(0, 16).replace('T', ' ');
            const outputs = job.status === 'Completed' && job.output_file_paths.length
                ? '<ul>' + job.output_file_paths.map(p => '<li class="muted">' + esc(p) + '</li>').join('') + '</ul>'
                : '';
            const process = job.status === 'Uploaded'
                ? '<button class="btn btn-ghost" data-job-id="' + esc(job.id) + '">Process</button>'
                : '';

            return `
                <article class="card">
                    <h3>${esc(job.input_file_path)}</h3>
                    <p>
                        <span class="badge badge-${esc(job.status.toLowerCase())}">${esc(job.status)}</span>
                        <span class="muted"> created ${created}</span>
                    </p>
                    ${outputs}
                    ${process}
                </article>
            `;
        }).join('') + '</div>';
    } catch (e) {
        section.innerHTML = '<div class="card error">Error: ' + esc(e.message) + '</div>';
    }
}

async function processJob(jobId) {
    try {
        await fetch('/api/v1/jobs/' + encodeURIComponent(jobId) + '/process', { method: 'POST' });
        setTimeout(loadJobs, 300);
    } catch (e) {
        console.error('Process error:', e);
    }
}

// Event delegation for the per-card Process buttons (prevents XSS)
document.querySelector('#jobs').addEventListener('click', e => {
    const btn = e.target.closest('button[data-job-id]');
    if (btn) processJob(btn.dataset.jobId);
});

// Upload dialog wiring
const uploadModal = document.querySelector('#upload-modal');
const uploadPath = document.querySelector('#upload-path');
const uploadError = document.querySelector('#upload-error');

function showUploadError(msg) {
    uploadError.textContent = msg;
    uploadError.style.display = '';
}

document.querySelector('#upload-button').addEventListener('click', () => {
    uploadModal.style.display = 'flex';
    uploadPath.focus();
});

document.querySelector('#upload-cancel').addEventListener('click', () => {
    uploadError.style.display = 'none';
    uploadModal.style.display = 'none';
});

document.querySelector('#upload-submit').addEventListener('click', async () => {
    const path = uploadPath.value.trim();
    if (!path) {
        showUploadError('Enter a file path');
        return;
    }
    try {
        const res = await fetch('/api/v1/jobs', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ user_id: 1, input_file_path: path })
        });
        if (!res.ok) throw new Error('HTTP ' + res.status);
        uploadPath.value = '';
        uploadError.style.display = 'none';
        uploadModal.style.display = 'none';
        loadJobs();
    } catch (e) {
        showUploadError('Upload failed: ' + e.message);
    }
});

loadJobs();

// Poll so Queued/Processing cards advance without a manual reload
setInterval(loadJobs, 4000);
"#;

/// Library page component.
#[component]
pub fn Library() -> Element {
    rsx! {
        Shell {
            title: "Library".to_string(),
            current_path: "/library".to_string(),
            scripts: Some(LIBRARY_SCRIPT.to_string()),

            h1 { "Library" }
            button { id: "upload-button", class: "btn btn-primary", "Upload" }

            section { id: "jobs",
                div { class: "card", "Loading jobs..." }
            }
        }
    }
}
