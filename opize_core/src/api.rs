//! Caller-facing resource namespaces. Each verb binds typed arguments to an
//! endpoint value and hands it to the executor as a [`PendingRequest`].

use crate::client::{Client, PendingRequest};
use crate::endpoints::dashboard::{
    DeleteNotionPage, GetNotionPage, ListNotionPages, NotionPagePatch, PatchNotionPage,
};
use crate::endpoints::oauth::{OauthTokenRequest, OauthVerifyRequest, PostOauth, PostOauthVerify};
use crate::endpoints::project::{
    DeleteProject, GetProject, ListProjects, NewProject, PatchProject, PostProject,
    PostProjectOauth, ProjectPatch,
};
use crate::endpoints::user::{GetUser, GetUserOauths, PatchUser, UserId, UserPatch};
use crate::transport::Transport;

impl<T: Transport> Client<T> {
    pub fn user(&self) -> UserApi<'_, T> {
        UserApi { client: self }
    }

    pub fn project(&self) -> ProjectApi<'_, T> {
        ProjectApi { client: self }
    }

    pub fn oauth(&self) -> OauthApi<'_, T> {
        OauthApi { client: self }
    }

    pub fn dashboard(&self) -> DashboardApi<'_, T> {
        DashboardApi { client: self }
    }
}

/// Verbs over `/user`.
pub struct UserApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> UserApi<'a, T> {
    pub fn get(self, user_id: UserId) -> PendingRequest<'a, GetUser, T> {
        self.client.request(GetUser { user_id })
    }

    pub fn oauths(self, user_id: UserId) -> PendingRequest<'a, GetUserOauths, T> {
        self.client.request(GetUserOauths { user_id })
    }

    pub fn patch(self, user_id: UserId, body: UserPatch) -> PendingRequest<'a, PatchUser, T> {
        self.client.request(PatchUser { user_id, body })
    }
}

/// Verbs over `/project`.
pub struct ProjectApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ProjectApi<'a, T> {
    pub fn list(self) -> PendingRequest<'a, ListProjects, T> {
        self.client.request(ListProjects)
    }

    pub fn get(self, project_code: impl Into<String>) -> PendingRequest<'a, GetProject, T> {
        self.client.request(GetProject {
            project_code: project_code.into(),
        })
    }

    pub fn post(self, body: NewProject) -> PendingRequest<'a, PostProject, T> {
        self.client.request(PostProject { body })
    }

    pub fn patch(
        self,
        project_code: impl Into<String>,
        body: ProjectPatch,
    ) -> PendingRequest<'a, PatchProject, T> {
        self.client.request(PatchProject {
            project_code: project_code.into(),
            body,
        })
    }

    pub fn delete(self, project_code: impl Into<String>) -> PendingRequest<'a, DeleteProject, T> {
        self.client.request(DeleteProject {
            project_code: project_code.into(),
        })
    }

    pub fn oauth(self) -> ProjectOauthApi<'a, T> {
        ProjectOauthApi {
            client: self.client,
        }
    }
}

/// Verbs over `/project/{projectCode}/oauth`.
pub struct ProjectOauthApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ProjectOauthApi<'a, T> {
    pub fn post(self, project_code: impl Into<String>) -> PendingRequest<'a, PostProjectOauth, T> {
        self.client.request(PostProjectOauth {
            project_code: project_code.into(),
        })
    }
}

/// Verbs over `/oauth`.
pub struct OauthApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> OauthApi<'a, T> {
    pub fn post(self, body: OauthTokenRequest) -> PendingRequest<'a, PostOauth, T> {
        self.client.request(PostOauth { body })
    }

    pub fn verify(
        self,
        project_code: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> PendingRequest<'a, PostOauthVerify, T> {
        self.client.request(PostOauthVerify {
            project_code: project_code.into(),
            body: OauthVerifyRequest {
                redirect_url: redirect_url.into(),
            },
        })
    }
}

/// Namespace holder for `/dashboard/...`.
pub struct DashboardApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> DashboardApi<'a, T> {
    pub fn notion(self) -> NotionApi<'a, T> {
        NotionApi {
            client: self.client,
        }
    }
}

pub struct NotionApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> NotionApi<'a, T> {
    pub fn page(self) -> NotionPageApi<'a, T> {
        NotionPageApi {
            client: self.client,
        }
    }
}

/// Verbs over `/dashboard/notion/page`.
pub struct NotionPageApi<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> NotionPageApi<'a, T> {
    pub fn list(self) -> PendingRequest<'a, ListNotionPages, T> {
        self.client.request(ListNotionPages)
    }

    pub fn get(self, page: impl Into<String>) -> PendingRequest<'a, GetNotionPage, T> {
        self.client.request(GetNotionPage { page: page.into() })
    }

    pub fn patch(
        self,
        page: impl Into<String>,
        body: NotionPagePatch,
    ) -> PendingRequest<'a, PatchNotionPage, T> {
        self.client.request(PatchNotionPage {
            page: page.into(),
            body,
        })
    }

    pub fn delete(self, page: impl Into<String>) -> PendingRequest<'a, DeleteNotionPage, T> {
        self.client.request(DeleteNotionPage { page: page.into() })
    }
}
