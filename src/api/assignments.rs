use super::ApiClient;
use crate::config::ApiConfig;
use crate::error::AppResult;
use crate::request::{HttpClient, HttpMethod};
use service_desk_shared::{
    AssignmentAction, AssignmentResponse, CreateAssignmentRequest, PATH_ASSIGNMENTS,
    PATH_MY_ASSIGNMENTS,
};

/// 派单服务
#[derive(Clone)]
pub struct AssignmentApi<C: HttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> AssignmentApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self {
            api: ApiClient::new(client, config),
        }
    }

    pub async fn create(&self, req: &CreateAssignmentRequest) -> AppResult<()> {
        self.api.call_discard("assignments.create", req).await
    }

    /// 当前技师的派单
    pub async fn mine(&self) -> AppResult<Vec<AssignmentResponse>> {
        self.api
            .get_json("assignments.mine", PATH_MY_ASSIGNMENTS)
            .await
    }

    pub async fn act(&self, assignment_id: &str, action: AssignmentAction) -> AppResult<()> {
        let path = format!(
            "{}/{}/{}",
            PATH_ASSIGNMENTS,
            assignment_id,
            action.path_segment()
        );
        self.api
            .send::<()>("assignments.act", HttpMethod::Put, &path, None)
            .await
    }

    pub async fn accept(&self, assignment_id: &str) -> AppResult<()> {
        self.act(assignment_id, AssignmentAction::Accept).await
    }

    pub async fn reject(&self, assignment_id: &str) -> AppResult<()> {
        self.act(assignment_id, AssignmentAction::Reject).await
    }

    pub async fn start(&self, assignment_id: &str) -> AppResult<()> {
        self.act(assignment_id, AssignmentAction::Start).await
    }

    pub async fn complete(&self, assignment_id: &str) -> AppResult<()> {
        self.act(assignment_id, AssignmentAction::Complete).await
    }
}
